use chrono::{DateTime, Utc};

use quotedesk_catalog::{Catalog, CatalogPage, CatalogView};
use quotedesk_core::{DomainError, DomainResult};
use quotedesk_estimate::{Estimate, EstimateExporter, UnsupportedExporter};

use crate::action::{DispatchOutcome, SessionAction};
use crate::config::SessionConfig;
use crate::snapshot::{Pagination, ProductRow, SessionSnapshot};
use crate::theme::ThemeContext;

/// Single owner of one browsing session's state: the catalog view, the
/// estimate and the display options.
///
/// All mutation goes through [`Session::dispatch`], one action at a time.
#[derive(Debug)]
pub struct Session<E = UnsupportedExporter> {
    catalog: Catalog,
    view: CatalogView,
    estimate: Estimate,
    show_images: bool,
    public_url: String,
    theme: ThemeContext,
    exporter: E,
}

impl Session {
    pub fn new(catalog: Catalog, config: &SessionConfig) -> Self {
        Self {
            catalog,
            view: CatalogView::new(config.default_page_size),
            estimate: Estimate::new(),
            show_images: config.show_images,
            public_url: config.public_url.clone(),
            theme: ThemeContext::default(),
            exporter: UnsupportedExporter,
        }
    }
}

impl<E> Session<E> {
    /// Replace the exporter that handles [`SessionAction::Export`].
    pub fn with_exporter<X: EstimateExporter>(self, exporter: X) -> Session<X> {
        Session {
            catalog: self.catalog,
            view: self.view,
            estimate: self.estimate,
            show_images: self.show_images,
            public_url: self.public_url,
            theme: self.theme,
            exporter,
        }
    }

    /// Share an existing theme handle instead of the session's own.
    pub fn with_theme(mut self, theme: ThemeContext) -> Self {
        self.theme = theme;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn show_images(&self) -> bool {
        self.show_images
    }

    /// Handle for display components that follow the theme.
    pub fn theme(&self) -> ThemeContext {
        self.theme.clone()
    }

    /// The page currently on screen.
    pub fn current_page(&self) -> CatalogPage<'_> {
        self.view.current(&self.catalog)
    }

    /// Everything the presentation layer needs, computed from scratch.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Utc>) -> SessionSnapshot {
        let page = self.current_page();
        let rows = page
            .rows
            .iter()
            .enumerate()
            .map(|(i, product)| ProductRow::new(page.row_number(i), product, &self.public_url, self.show_images))
            .collect();

        SessionSnapshot {
            params: self.view.params().clone(),
            category_label: self.view.params().category.label(),
            sort_indicator: self.view.params().sort.indicator(),
            show_images: self.show_images,
            rows,
            pagination: Pagination::from(&page),
            estimate: self.estimate.snapshot(now),
            theme: self.theme.get(),
        }
    }
}

impl<E: EstimateExporter> Session<E> {
    /// Apply one action to completion.
    ///
    /// Only two actions can fail: adding a product that is not in the catalog,
    /// and an export the configured exporter rejects.
    pub fn dispatch(&mut self, action: SessionAction) -> DomainResult<DispatchOutcome> {
        let name = action.name();
        let outcome = self.apply(action);
        match &outcome {
            Ok(outcome) => tracing::debug!(action = name, ?outcome, "action dispatched"),
            Err(error) => tracing::warn!(action = name, %error, "action failed"),
        }
        outcome
    }

    fn apply(&mut self, action: SessionAction) -> DomainResult<DispatchOutcome> {
        use DispatchOutcome::{Applied, Ignored};

        let outcome = match action {
            SessionAction::SetCategory { category } => {
                self.view.set_category(category);
                Applied
            }
            SessionAction::SetQuery { query } => {
                self.view.set_query(query);
                Applied
            }
            SessionAction::SetPageSize { page_size } => {
                self.view.set_page_size(page_size);
                Applied
            }
            SessionAction::CycleSort => {
                self.view.cycle_sort();
                Applied
            }
            SessionAction::GoToPage { page } => changed(self.view.go_to_page(&self.catalog, page)),
            SessionAction::NextPage => changed(self.view.next_page(&self.catalog)),
            SessionAction::PreviousPage => changed(self.view.previous_page(&self.catalog)),
            SessionAction::ResetFilters => {
                self.view.reset();
                Applied
            }
            SessionAction::ToggleImages => {
                self.show_images = !self.show_images;
                Applied
            }
            SessionAction::AddToEstimate { product_id } => {
                let product = self
                    .catalog
                    .get(&product_id)
                    .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;
                self.estimate.add(product);
                Applied
            }
            SessionAction::RemoveFromEstimate { product_id } => changed(self.estimate.remove(&product_id)),
            SessionAction::SetQuantity { product_id, input } => {
                changed(self.estimate.set_quantity_input(&product_id, &input).is_some())
            }
            SessionAction::Export { format } => {
                let snapshot = self.estimate.snapshot(Utc::now());
                DispatchOutcome::Exported(self.exporter.export(format, &snapshot)?)
            }
            SessionAction::SetDarkMode { enabled } => {
                self.theme.set_dark_mode(enabled);
                Applied
            }
        };
        Ok(outcome)
    }
}

fn changed(applied: bool) -> DispatchOutcome {
    if applied {
        DispatchOutcome::Applied
    } else {
        DispatchOutcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_catalog::{PageSize, Product, SearchCategory, SearchField, SortOrder};
    use quotedesk_core::ProductId;
    use quotedesk_estimate::ExportFormat;

    fn id(s: &str) -> ProductId {
        s.parse().unwrap()
    }

    fn session() -> Session {
        let catalog = Catalog::new(vec![
            Product::new(id("a"), "Anchor", "1000"),
            Product::new(id("b"), "Bolt", "2000"),
        ])
        .unwrap();
        Session::new(catalog, &SessionConfig::default())
    }

    #[test]
    fn add_twice_then_other_product() {
        let mut s = session();
        for p in ["a", "a", "b"] {
            let outcome = s.dispatch(SessionAction::AddToEstimate { product_id: id(p) }).unwrap();
            assert_eq!(outcome, DispatchOutcome::Applied);
        }

        let snap = s.snapshot();
        assert_eq!(snap.estimate.lines.len(), 2);
        assert_eq!(snap.estimate.lines[0].quantity, 2);
        assert_eq!(snap.estimate.lines[0].subtotal, "2,000");
        assert_eq!(snap.estimate.lines[1].quantity, 1);
        assert_eq!(snap.estimate.lines[1].subtotal, "2,000");
        assert_eq!(snap.estimate.total, "4,000");
    }

    #[test]
    fn adding_unknown_product_fails_without_side_effects() {
        let mut s = session();
        let err = s
            .dispatch(SessionAction::AddToEstimate { product_id: id("nope") })
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(s.estimate().is_empty());
    }

    #[test]
    fn no_op_actions_report_ignored() {
        let mut s = session();
        assert_eq!(
            s.dispatch(SessionAction::GoToPage { page: 2 }).unwrap(),
            DispatchOutcome::Ignored
        );
        assert_eq!(
            s.dispatch(SessionAction::RemoveFromEstimate { product_id: id("a") }).unwrap(),
            DispatchOutcome::Ignored
        );
        assert_eq!(
            s.dispatch(SessionAction::SetQuantity { product_id: id("a"), input: "3".into() })
                .unwrap(),
            DispatchOutcome::Ignored
        );
    }

    #[test]
    fn export_goes_through_the_configured_exporter() {
        let mut s = session();
        let err = s
            .dispatch(SessionAction::Export { format: ExportFormat::Document })
            .unwrap_err();
        assert!(matches!(err, DomainError::Unsupported(_)));
    }

    #[test]
    fn reset_is_a_single_step() {
        let mut s = session();
        s.dispatch(SessionAction::SetCategory {
            category: SearchCategory::Field(SearchField::Brand),
        })
        .unwrap();
        s.dispatch(SessionAction::SetQuery { query: "x".into() }).unwrap();
        s.dispatch(SessionAction::CycleSort).unwrap();
        s.dispatch(SessionAction::SetPageSize { page_size: PageSize::Fifty }).unwrap();

        s.dispatch(SessionAction::ResetFilters).unwrap();

        let params = s.view().params();
        assert_eq!(params.category, SearchCategory::All);
        assert_eq!(params.query, "");
        assert_eq!(params.sort, SortOrder::Unordered);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, PageSize::Twenty);
    }

    #[test]
    fn theme_handles_follow_dispatched_changes() {
        let mut s = session();
        let header = s.theme();
        s.dispatch(SessionAction::SetDarkMode { enabled: true }).unwrap();
        assert!(header.is_dark());
    }
}
