use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use quotedesk_catalog::Product;
use quotedesk_core::money::format_amount;
use quotedesk_core::{DomainError, DomainResult, Entity, ProductId};

use crate::export::{EstimateLine, EstimateSnapshot};
use crate::quantity::sanitize_quantity;

/// Estimate line: a catalog product plus the chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u64,
}

impl EstimateItem {
    /// Unit price × quantity; `NaN` when the price text does not parse.
    pub fn subtotal(&self) -> f64 {
        self.product.unit_price() * self.quantity as f64
    }
}

impl Entity for EstimateItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}

/// Running estimate: line items keyed by product, in first-added order.
///
/// A product appears at most once; adding it again bumps its quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    items: IndexMap<ProductId, EstimateItem>,
}

impl Estimate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`: merge into the existing line or append a
    /// new one. Returns the line's quantity afterwards.
    pub fn add(&mut self, product: &Product) -> u64 {
        if let Some(item) = self.items.get_mut(&product.id) {
            item.quantity = item.quantity.saturating_add(1);
            tracing::debug!(product_id = %product.id, quantity = item.quantity, "estimate line incremented");
            return item.quantity;
        }

        self.items.insert(
            product.id.clone(),
            EstimateItem {
                product: product.clone(),
                quantity: 1,
            },
        );
        tracing::debug!(product_id = %product.id, lines = self.items.len(), "estimate line added");
        1
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let removed = self.items.shift_remove(id).is_some();
        if removed {
            tracing::debug!(product_id = %id, "estimate line removed");
        }
        removed
    }

    /// Overwrite the quantity of the line for `id`. Returns whether such a
    /// line exists.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u64) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.quantity = quantity;
                tracing::debug!(product_id = %id, quantity, "estimate quantity set");
                true
            }
            None => false,
        }
    }

    /// Sanitise raw quantity input and apply it. Returns the applied
    /// quantity, or `None` when there is no line for `id`.
    pub fn set_quantity_input(&mut self, id: &ProductId, raw: &str) -> Option<u64> {
        let quantity = sanitize_quantity(raw);
        self.set_quantity(id, quantity).then_some(quantity)
    }

    pub fn get(&self, id: &ProductId) -> Option<&EstimateItem> {
        self.items.get(id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &EstimateItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all subtotals. A single unparsable price makes the result `NaN`.
    pub fn total(&self) -> f64 {
        self.items().map(EstimateItem::subtotal).sum()
    }

    /// [`Estimate::total`] with thousands separators (`"4,000"`, `"NaN"`).
    pub fn formatted_total(&self) -> String {
        format_amount(self.total())
    }

    /// Like [`Estimate::total`], but fails on the first line whose price is
    /// not a number, and when the sum overflows to infinity.
    pub fn checked_total(&self) -> DomainResult<f64> {
        let total = self.items().try_fold(0.0, |acc, item| {
            let price = item.product.unit_price();
            if price.is_nan() {
                return Err(DomainError::validation(format!(
                    "price of {} is not a number: {:?}",
                    item.product.id, item.product.price
                )));
            }
            Ok(acc + price * item.quantity as f64)
        })?;
        if !total.is_finite() {
            return Err(DomainError::validation(format!("estimate total overflows: {total}")));
        }
        Ok(total)
    }

    /// Display-ready copy of the estimate, as handed to exporters.
    pub fn snapshot(&self, generated_at: DateTime<Utc>) -> EstimateSnapshot {
        let lines = self
            .items()
            .map(|item| EstimateLine {
                product_id: item.product.id.clone(),
                product_name: item.product.product_name.clone(),
                unit_price: item.product.price_display(),
                quantity: item.quantity,
                subtotal: format_amount(item.subtotal()),
            })
            .collect();

        EstimateSnapshot {
            generated_at,
            lines,
            total: self.formatted_total(),
        }
    }
}
