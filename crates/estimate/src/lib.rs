//! Estimate (quote) accumulator.
//!
//! Deterministic in-memory bookkeeping of the products a user is pricing out:
//! merge-on-add line items, quantity edits, totals and the export extension
//! point (no rendering, no persistence).

pub mod estimate;
pub mod export;
pub mod quantity;

pub use estimate::{Estimate, EstimateItem};
pub use export::{
    EstimateExporter, EstimateLine, EstimateSnapshot, ExportArtifact, ExportFormat, UnsupportedExporter,
};
pub use quantity::sanitize_quantity;
