//! Client-submitted cart types. Untrusted input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One line of a client cart: a product reference and a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// The checkout request body.
///
/// Missing fields fall back to their empty values (empty token, empty cart,
/// zero total) rather than failing deserialization; the settlement checks
/// reject them with a proper outcome instead of a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "carrito", default)]
    pub cart: Vec<CartLine>,
    #[serde(
        rename = "total_cliente",
        with = "rust_decimal::serde::float",
        default
    )]
    pub client_total: Decimal,
}
