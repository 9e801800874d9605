//! Estimate export extension point.
//!
//! Rendering an estimate to an image, spreadsheet or document is left to
//! implementors of [`EstimateExporter`]. The crate only defines the data they
//! receive and an exporter that reports every format as unavailable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quotedesk_core::{DomainError, DomainResult, ProductId};

/// Target file kind of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Image,
    Spreadsheet,
    Document,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Image => "png",
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
        }
    }

    /// `estimate-YYYYMMDD-HHMMSS.<ext>`
    pub fn file_name(self, generated_at: DateTime<Utc>) -> String {
        format!(
            "estimate-{}.{}",
            generated_at.format("%Y%m%d-%H%M%S"),
            self.extension()
        )
    }
}

impl core::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ExportFormat::Image => "image",
            ExportFormat::Spreadsheet => "spreadsheet",
            ExportFormat::Document => "document",
        })
    }
}

/// One formatted estimate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: String,
    pub quantity: u64,
    pub subtotal: String,
}

/// Formatted estimate at a point in time; also what the preview shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSnapshot {
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<EstimateLine>,
    pub total: String,
}

/// Produced file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns an estimate snapshot into a file of the requested format.
pub trait EstimateExporter {
    fn export(&self, format: ExportFormat, snapshot: &EstimateSnapshot) -> DomainResult<ExportArtifact>;
}

impl<E> EstimateExporter for Box<E>
where
    E: EstimateExporter + ?Sized,
{
    fn export(&self, format: ExportFormat, snapshot: &EstimateSnapshot) -> DomainResult<ExportArtifact> {
        (**self).export(format, snapshot)
    }
}

/// Exporter used when no real one is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedExporter;

impl EstimateExporter for UnsupportedExporter {
    fn export(&self, format: ExportFormat, snapshot: &EstimateSnapshot) -> DomainResult<ExportArtifact> {
        tracing::warn!(%format, lines = snapshot.lines.len(), "estimate export requested but no exporter is configured");
        Err(DomainError::unsupported(format!("{format} export is not available")))
    }
}
