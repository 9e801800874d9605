use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quotedesk_core::money::{format_amount, group_thousands, parse_price, vat_inclusive};
use quotedesk_core::{DomainError, DomainResult, Entity, ProductId, find_by_id};

/// Catalog record, as shipped in the bundled product list.
///
/// Field names follow the dataset (`uuid`, `productName`, ...). The price is
/// kept as the original decimal text and parsed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "uuid")]
    pub id: ProductId,
    pub product_name: String,
    pub standard: String,
    pub brand: String,
    pub country: String,
    pub price: String,
    /// Units per package.
    pub pieces: u32,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Minimal record with the given identity, name and price; other text
    /// fields empty.
    pub fn new(id: ProductId, product_name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            standard: String::new(),
            brand: String::new(),
            country: String::new(),
            price: price.into(),
            pieces: 1,
            size: String::new(),
            image: None,
        }
    }

    /// Numeric unit price; `NaN` when the text is not a decimal number.
    pub fn unit_price(&self) -> f64 {
        parse_price(&self.price)
    }

    /// Price text with thousands separators (`"12000"` -> `"12,000"`).
    pub fn price_display(&self) -> String {
        group_thousands(&self.price)
    }

    /// Price with 10% VAT added, rounded and formatted.
    pub fn vat_inclusive_display(&self) -> String {
        format_amount(vat_inclusive(self.unit_price()))
    }

    /// Public URL of the product image, if it has one.
    pub fn image_url(&self, public_url: &str) -> Option<String> {
        self.image
            .as_deref()
            .map(|image| format!("{}/images/{}", public_url.trim_end_matches('/'), image))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Static, read-only product collection loaded once per session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    ///
    /// Prices are not validated: unparsable ones are kept and only logged.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id in catalog: {}",
                    product.id
                )));
            }
            if product.unit_price().is_nan() {
                tracing::warn!(
                    product_id = %product.id,
                    price = %product.price,
                    "catalog price is not a number"
                );
            }
        }

        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        Ok(Self::new(products)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        s.parse().unwrap()
    }

    const SAMPLE: &str = r#"[
        {
            "uuid": "p-1",
            "productName": "Steel bolt",
            "standard": "M8x40",
            "brand": "Hanil",
            "country": "Korea",
            "price": "12000",
            "pieces": 100,
            "size": "40mm",
            "image": "bolt.png"
        },
        {
            "uuid": "p-2",
            "productName": "Washer",
            "standard": "M8",
            "brand": "Acme",
            "country": "China",
            "price": "350",
            "pieces": 500,
            "size": "8mm"
        }
    ]"#;

    #[test]
    fn loads_dataset_field_names() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let bolt = catalog.get(&id("p-1")).unwrap();
        assert_eq!(bolt.product_name, "Steel bolt");
        assert_eq!(bolt.pieces, 100);
        assert_eq!(bolt.image.as_deref(), Some("bolt.png"));
        assert_eq!(catalog.get(&id("p-2")).unwrap().image, None);
        assert!(catalog.get(&id("p-3")).is_none());
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let products = vec![
            Product::new(id("a"), "first", "1"),
            Product::new(id("a"), "second", "2"),
        ];
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("a")));
    }

    #[test]
    fn keeps_products_with_unparsable_prices() {
        let catalog = Catalog::new(vec![Product::new(id("x"), "odd", "call us")]).unwrap();
        assert!(catalog.products()[0].unit_price().is_nan());
    }

    #[test]
    fn rejects_blank_identifier_in_json() {
        let err = Catalog::from_json_str(
            r#"[{"uuid":"","productName":"n","standard":"","brand":"","country":"","price":"1","pieces":1,"size":""}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn loads_from_reader() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].product_name, "Washer");

        let err = Catalog::from_reader("[{".as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn price_display_helpers() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let bolt = catalog.get(&id("p-1")).unwrap();
        assert_eq!(bolt.price_display(), "12,000");
        assert_eq!(bolt.vat_inclusive_display(), "13,200");
        assert_eq!(
            bolt.image_url("/static/").as_deref(),
            Some("/static/images/bolt.png")
        );
        assert_eq!(bolt.image_url("").as_deref(), Some("/images/bolt.png"));
    }
}
