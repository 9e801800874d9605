//! Searchable fields and the search category selector.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use quotedesk_core::DomainError;

use crate::product::Product;

/// Text field of a [`Product`] that can be searched on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    ProductName,
    Standard,
    Brand,
    Country,
}

impl SearchField {
    /// Fields consulted by [`SearchCategory::All`], in display order.
    pub const ALL: [SearchField; 4] = [
        SearchField::ProductName,
        SearchField::Standard,
        SearchField::Brand,
        SearchField::Country,
    ];

    pub fn value(self, product: &Product) -> &str {
        match self {
            SearchField::ProductName => &product.product_name,
            SearchField::Standard => &product.standard,
            SearchField::Brand => &product.brand,
            SearchField::Country => &product.country,
        }
    }

    /// Dataset key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::ProductName => "productName",
            SearchField::Standard => "standard",
            SearchField::Brand => "brand",
            SearchField::Country => "country",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::ProductName => "Product name",
            SearchField::Standard => "Standard",
            SearchField::Brand => "Brand",
            SearchField::Country => "Country of origin",
        }
    }
}

impl FromStr for SearchField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown search field: {s}")))
    }
}

/// Search scope: every searchable field, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SearchCategory {
    #[default]
    All,
    Field(SearchField),
}

impl SearchCategory {
    /// Case-insensitive substring match. `needle` must already be lowercase.
    pub fn matches(self, product: &Product, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |field: SearchField| field.value(product).to_lowercase().contains(needle);
        match self {
            SearchCategory::All => SearchField::ALL.into_iter().any(hit),
            SearchCategory::Field(field) => hit(field),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchCategory::All => "all",
            SearchCategory::Field(field) => field.as_str(),
        }
    }

    /// Text shown in the category selector.
    pub fn label(self) -> &'static str {
        match self {
            SearchCategory::All => "All",
            SearchCategory::Field(field) => field.label(),
        }
    }
}

impl FromStr for SearchCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchCategory::All),
            other => other.parse().map(SearchCategory::Field),
        }
    }
}

impl TryFrom<String> for SearchCategory {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SearchCategory> for String {
    fn from(value: SearchCategory) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
