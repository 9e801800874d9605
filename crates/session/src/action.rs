//! User interactions a session reacts to.

use serde::{Deserialize, Serialize};

use quotedesk_catalog::{PageSize, SearchCategory};
use quotedesk_core::ProductId;
use quotedesk_estimate::{ExportArtifact, ExportFormat};

/// One discrete UI event. Actions are applied strictly one after another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    SetCategory { category: SearchCategory },
    SetQuery { query: String },
    SetPageSize { page_size: PageSize },
    CycleSort,
    GoToPage { page: usize },
    NextPage,
    PreviousPage,
    ResetFilters,
    ToggleImages,
    AddToEstimate { product_id: ProductId },
    RemoveFromEstimate { product_id: ProductId },
    /// Raw text from the quantity input; sanitised before use.
    SetQuantity { product_id: ProductId, input: String },
    Export { format: ExportFormat },
    /// Theme change notification from outside the session.
    SetDarkMode { enabled: bool },
}

impl SessionAction {
    /// Stable action name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::SetCategory { .. } => "catalog.set_category",
            SessionAction::SetQuery { .. } => "catalog.set_query",
            SessionAction::SetPageSize { .. } => "catalog.set_page_size",
            SessionAction::CycleSort => "catalog.cycle_sort",
            SessionAction::GoToPage { .. } => "catalog.go_to_page",
            SessionAction::NextPage => "catalog.next_page",
            SessionAction::PreviousPage => "catalog.previous_page",
            SessionAction::ResetFilters => "catalog.reset",
            SessionAction::ToggleImages => "display.toggle_images",
            SessionAction::AddToEstimate { .. } => "estimate.add",
            SessionAction::RemoveFromEstimate { .. } => "estimate.remove",
            SessionAction::SetQuantity { .. } => "estimate.set_quantity",
            SessionAction::Export { .. } => "estimate.export",
            SessionAction::SetDarkMode { .. } => "display.set_dark_mode",
        }
    }
}

/// What dispatching an action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State changed.
    Applied,
    /// Valid request with no effect (page out of range, unknown estimate line).
    Ignored,
    Exported(ExportArtifact),
}
