//! The pricing & stock validator and the checkout outcome type.
//!
//! Everything here is pure computation over an in-memory catalog snapshot.
//! The server's settlement engine runs the validator first, decides, and
//! only then mutates and persists - no interleaving of mutation with
//! validation.

use rust_decimal::Decimal;

use crate::types::{CartLine, Catalog};

/// Absolute tolerance for comparing the client-claimed total against the
/// server-computed one. Absorbs floating-point rounding drift from the
/// browser; any larger deviation in either direction is a price-integrity
/// violation.
#[must_use]
pub fn price_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01 currency units
}

/// Result of validating a cart against a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartValidation {
    /// The authoritative total, computed from server-held prices only.
    pub validated_total: Decimal,
    /// True if any matched line requests more units than are in stock.
    pub stock_error: bool,
    /// Number of cart lines that matched a catalog product. Lines with
    /// unknown ids contribute neither price nor a stock flag.
    pub matched_lines: usize,
}

/// Recompute the cart total and check stock feasibility.
///
/// For each line, the first product with a matching id contributes
/// `price * quantity` to the total and is checked against its stock.
/// Unknown ids are silently skipped (tolerant policy; the settlement
/// engine's strict mode layers on top of `matched_lines`).
#[must_use]
pub fn validate_cart(cart: &[CartLine], catalog: &Catalog) -> CartValidation {
    let mut validated_total = Decimal::ZERO;
    let mut stock_error = false;
    let mut matched_lines = 0;

    for line in cart {
        if let Some(product) = catalog.product(line.product_id) {
            validated_total += product.line_total(line.quantity);
            if product.stock < line.quantity {
                stock_error = true;
            }
            matched_lines += 1;
        }
    }

    CartValidation {
        validated_total,
        stock_error,
        matched_lines,
    }
}

/// Whether a client-claimed total agrees with the validated one, within
/// [`price_tolerance`].
#[must_use]
pub fn totals_match(validated: Decimal, claimed: Decimal) -> bool {
    (validated - claimed).abs() <= price_tolerance()
}

/// Subtract each cart line's quantity from its product's stock.
///
/// Must only be called after validation has passed: stock sufficiency is
/// not re-checked here (the subtraction saturates, so `stock >= 0` holds
/// structurally either way). Lines with unknown ids are skipped. Returns
/// whether any product was actually changed.
pub fn apply_stock_decrements(cart: &[CartLine], catalog: &mut Catalog) -> bool {
    let mut changed = false;

    for line in cart {
        if let Some(product) = catalog.product_mut(line.product_id) {
            product.stock = product.stock.saturating_sub(line.quantity);
            changed = true;
        }
    }

    changed
}

/// Which half of the store round-trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFailureKind {
    /// The catalog document could not be loaded; checkout never proceeds
    /// on absent pricing data.
    CatalogUnavailable,
    /// The mutated catalog could not be persisted; the in-memory mutation
    /// is discarded and must not be reported as committed.
    SaveFailed,
}

/// Outcome of a settlement attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// All checks passed, stock was decremented and persisted.
    Success {
        validated_total: Decimal,
        catalog: Catalog,
    },
    /// The claimed total disagrees with server pricing. Carries the
    /// unmodified catalog so the client can resynchronize.
    PriceMismatch { catalog: Catalog },
    /// Pricing matched but some line requests more units than available.
    InsufficientStock,
    /// A non-empty cart in which no line matched any catalog product;
    /// nothing would be decremented, so nothing is settled.
    NoMatchingProducts,
    /// The cart was empty; rejected before any computation.
    EmptyCart,
    /// The request carried an invalid token.
    Unauthorized,
    /// Loading or persisting the catalog document failed.
    StorageFailure(StorageFailureKind),
}
