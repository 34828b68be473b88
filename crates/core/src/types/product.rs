//! Product and category records as stored in the catalog document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// A sellable product.
///
/// Owned exclusively by the catalog store; `stock` is mutated only by the
/// settlement engine during a committed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price in the shop currency. Non-negative by convention; the
    /// CLI's `validate` command flags violations.
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units on hand. `u32` makes the non-negativity invariant structural.
    pub stock: u32,
    #[serde(rename = "id_categoria")]
    pub category_id: CategoryId,
    #[serde(rename = "destacado", default)]
    pub featured: bool,
    #[serde(rename = "img", default)]
    pub image: String,
}

impl Product {
    /// Price of `quantity` units of this product.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.price * Decimal::from(quantity)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "nombre")]
    pub name: String,
}
