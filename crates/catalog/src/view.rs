//! Stateful view over a catalog: owns the view parameters and applies the
//! page-reset rules when they change.

use crate::params::{PageSize, SortOrder, ViewParams};
use crate::pipeline::{self, CatalogPage};
use crate::product::Catalog;
use crate::search::SearchCategory;

/// Current view parameters plus the page size that `reset` restores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    params: ViewParams,
    default_page_size: PageSize,
}

impl CatalogView {
    pub fn new(default_page_size: PageSize) -> Self {
        Self {
            params: ViewParams::with_page_size(default_page_size),
            default_page_size,
        }
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn default_page_size(&self) -> PageSize {
        self.default_page_size
    }

    /// Render the current page.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> CatalogPage<'a> {
        pipeline::view(catalog.products(), &self.params)
    }

    /// Total pages for the current filter and page size.
    pub fn total_pages(&self, catalog: &Catalog) -> usize {
        let matched = pipeline::filter(catalog.products(), self.params.category, &self.params.query);
        pipeline::total_pages(matched.len(), self.params.page_size)
    }

    /// Change the search scope. The current page is kept.
    pub fn set_category(&mut self, category: SearchCategory) {
        self.params.category = category;
    }

    /// Change the search text and go back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into();
        self.params.page = 1;
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.params.page_size = page_size;
        self.params.page = 1;
    }

    /// Advance the price sort toggle. The current page is kept.
    pub fn cycle_sort(&mut self) -> SortOrder {
        self.params.sort = self.params.sort.next();
        self.params.sort
    }

    /// Move to `page` if it lies in `1..=total_pages`; otherwise nothing
    /// changes. Returns whether the page moved.
    pub fn go_to_page(&mut self, catalog: &Catalog, page: usize) -> bool {
        let total = self.total_pages(catalog);
        if page == 0 || page > total {
            tracing::debug!(page, total, "page request out of range ignored");
            return false;
        }
        self.params.page = page;
        true
    }

    pub fn next_page(&mut self, catalog: &Catalog) -> bool {
        self.go_to_page(catalog, self.params.page.saturating_add(1))
    }

    pub fn previous_page(&mut self, catalog: &Catalog) -> bool {
        self.go_to_page(catalog, self.params.page.saturating_sub(1))
    }

    /// Restore every parameter to its initial value in a single assignment.
    pub fn reset(&mut self) {
        self.params = ViewParams::with_page_size(self.default_page_size());
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
