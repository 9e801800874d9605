//! View parameters: the ephemeral filter / sort / pagination state.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use quotedesk_core::DomainError;

use crate::search::SearchCategory;

/// Price sort order of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Unordered,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Next state of the three-way toggle: unordered -> ascending ->
    /// descending -> unordered.
    pub fn next(self) -> Self {
        match self {
            SortOrder::Unordered => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unordered,
        }
    }

    /// Marker shown next to the price column header.
    pub fn indicator(self) -> Option<&'static str> {
        match self {
            SortOrder::Unordered => None,
            SortOrder::Ascending => Some("▲"),
            SortOrder::Descending => Some("▼"),
        }
    }
}

/// Rows per page. `Unlimited` shows the whole result on one page.
///
/// Serialized as the number of rows, with `0` meaning unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Twenty,
    Fifty,
    Unlimited,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Twenty, PageSize::Fifty, PageSize::Unlimited];

    /// Window length, `None` when unlimited.
    pub fn limit(self) -> Option<usize> {
        match self {
            PageSize::Twenty => Some(20),
            PageSize::Fifty => Some(50),
            PageSize::Unlimited => None,
        }
    }

    pub fn as_u32(self) -> u32 {
        match self {
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Unlimited => 0,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.as_u32() == value)
            .ok_or_else(|| DomainError::validation(format!("unsupported page size: {value}")))
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.as_u32()
    }
}

impl FromStr for PageSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("page size is not a number: {s}")))?;
        PageSize::try_from(n)
    }
}

/// Everything that decides which slice of the catalog is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    pub category: SearchCategory,
    pub query: String,
    pub sort: SortOrder,
    /// 1-based.
    pub page: usize,
    pub page_size: PageSize,
}

impl ViewParams {
    /// Initial parameters with the given page size.
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            category: SearchCategory::All,
            query: String::new(),
            sort: SortOrder::Unordered,
            page: 1,
            page_size,
        }
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}
