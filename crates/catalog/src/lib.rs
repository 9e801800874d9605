//! Product catalog and its view pipeline.
//!
//! This crate contains the read-only catalog model and the deterministic
//! filter / sort / paginate pipeline that turns it into a displayed page
//! (no rendering, no persistence).

pub mod params;
pub mod pipeline;
pub mod product;
pub mod search;
pub mod view;

pub use params::{PageSize, SortOrder, ViewParams};
pub use pipeline::{CatalogPage, filter, paginate, sort_by_price, total_pages};
pub use product::{Catalog, CatalogLoadError, Product};
pub use search::{SearchCategory, SearchField};
pub use view::CatalogView;
