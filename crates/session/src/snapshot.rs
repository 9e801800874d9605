//! Render-ready view of a session.

use serde::Serialize;

use quotedesk_catalog::{CatalogPage, Product, ViewParams};
use quotedesk_core::ProductId;
use quotedesk_estimate::EstimateSnapshot;

use crate::theme::Theme;

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub number: usize,
    pub product_id: ProductId,
    pub product_name: String,
    pub standard: String,
    pub brand: String,
    pub country: String,
    /// Price with separators, VAT excluded.
    pub price: String,
    pub price_with_vat: String,
    pub pieces: u32,
    pub size: String,
    pub image_url: Option<String>,
    /// Show the image inline; otherwise a preview button links to `image_url`.
    pub image_inline: bool,
}

impl ProductRow {
    pub fn new(number: usize, product: &Product, public_url: &str, show_images: bool) -> Self {
        let image_url = product.image_url(public_url);
        Self {
            number,
            product_id: product.id.clone(),
            product_name: product.product_name.clone(),
            standard: product.standard.clone(),
            brand: product.brand.clone(),
            country: product.country.clone(),
            price: product.price_display(),
            price_with_vat: product.vat_inclusive_display(),
            pieces: product.pieces,
            size: product.size.clone(),
            image_inline: show_images && image_url.is_some(),
            image_url,
        }
    }
}

/// Pagination control state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    /// Products matching the filter across all pages.
    pub matched: usize,
}

impl From<&CatalogPage<'_>> for Pagination {
    fn from(page: &CatalogPage<'_>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            pages: page.page_numbers().collect(),
            matched: page.matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub params: ViewParams,
    /// Selector text for `params.category`.
    pub category_label: &'static str,
    pub sort_indicator: Option<&'static str>,
    pub show_images: bool,
    pub rows: Vec<ProductRow>,
    pub pagination: Pagination,
    pub estimate: EstimateSnapshot,
    pub theme: Theme,
}
