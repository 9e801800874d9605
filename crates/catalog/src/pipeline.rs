//! Pure catalog view pipeline: filter -> sort -> paginate.
//!
//! Every stage is a plain function of its input and the view parameters, and
//! [`view`] simply chains them. Nothing is cached between calls.

use core::cmp::Ordering;
use core::ops::RangeInclusive;

use crate::params::{PageSize, SortOrder, ViewParams};
use crate::product::Product;
use crate::search::SearchCategory;

/// Products matching `query` in the fields selected by `category`, in
/// catalog order.
pub fn filter<'a>(products: &'a [Product], category: SearchCategory, query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| category.matches(product, &needle))
        .collect()
}

/// Stable sort by numeric unit price. `Unordered` leaves the input as is.
///
/// Products whose price does not parse stay after every priced product in both
/// directions, in their incoming order.
pub fn sort_by_price(items: &mut Vec<&Product>, order: SortOrder) {
    let descending = match order {
        SortOrder::Unordered => return,
        SortOrder::Ascending => false,
        SortOrder::Descending => true,
    };

    let mut keyed: Vec<(f64, &Product)> = items.iter().map(|p| (p.unit_price(), *p)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_prices(*a, *b, descending));
    *items = keyed.into_iter().map(|(_, p)| p).collect();
}

fn compare_prices(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Number of pages for `count` rows; never less than one.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    match page_size.limit() {
        None => 1,
        Some(limit) => count.div_ceil(limit).max(1),
    }
}

/// Window of `items` shown on the 1-based `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let Some(limit) = page_size.limit() else {
        return items;
    };
    let start = page.saturating_sub(1).saturating_mul(limit).min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}

/// One rendered page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub rows: Vec<&'a Product>,
    pub page: usize,
    pub total_pages: usize,
    /// Products that passed the filter (across all pages).
    pub matched: usize,
    pub page_size: PageSize,
}

impl<'a> CatalogPage<'a> {
    /// 1-based display number of the row at `index` on this page.
    ///
    /// Unlimited pages count from 1 regardless of the current page.
    pub fn row_number(&self, index: usize) -> usize {
        let offset = self.page.saturating_sub(1) * self.page_size.limit().unwrap_or(0);
        offset + index + 1
    }

    /// Page numbers for the pagination control.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Run the whole pipeline for `params`.
pub fn view<'a>(products: &'a [Product], params: &ViewParams) -> CatalogPage<'a> {
    let mut matched = filter(products, params.category, &params.query);
    let total_pages = total_pages(matched.len(), params.page_size);
    sort_by_price(&mut matched, params.sort);
    let rows = paginate(&matched, params.page, params.page_size).to_vec();

    CatalogPage {
        rows,
        page: params.page,
        total_pages,
        matched: matched.len(),
        page_size: params.page_size,
    }
}
