//! The settlement engine: validate a checkout, then commit it or reject it.
//!
//! Settlement is a tiny two-phase protocol. The read-only validate phase
//! (empty-cart, price integrity, stock feasibility) fully gates the write
//! phase (decrement + persist); no mutation interleaves with validation,
//! and a failed persist leaves the stored document untouched.
//!
//! Check ordering is significant and preserved from the original: price
//! integrity is reported before a stock problem on the same request.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::instrument;

use mercadito_core::{
    CheckoutOutcome, CheckoutRequest, StorageFailureKind, apply_stock_decrements, totals_match,
    validate_cart,
};

use crate::store::CatalogStore;

/// Orchestrates load -> validate -> mutate -> persist for checkouts.
///
/// All settlements serialize behind one mutex spanning the whole sequence;
/// without it, two overlapping checkouts could both pass the stock check
/// against the same pre-decrement value and oversubscribe stock.
pub struct SettlementEngine {
    store: Arc<dyn CatalogStore>,
    strict_cart: bool,
    lock: Mutex<()>,
}

impl SettlementEngine {
    /// Create an engine over the given catalog store.
    ///
    /// With `strict_cart`, carts referencing unknown product ids are
    /// treated as client staleness and rejected with the fresh catalog;
    /// otherwise unknown ids are silently skipped like the original.
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>, strict_cart: bool) -> Self {
        Self {
            store,
            strict_cart,
            lock: Mutex::new(()),
        }
    }

    /// Settle a checkout request.
    ///
    /// The request's token is deliberately not inspected here;
    /// authentication happens at the endpoint, before the store is ever
    /// touched.
    #[instrument(skip_all, fields(lines = request.cart.len()))]
    pub async fn settle(&self, request: &CheckoutRequest) -> CheckoutOutcome {
        if request.cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }

        let _guard = self.lock.lock().await;

        let mut catalog = match self.store.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "catalog unavailable for settlement");
                return CheckoutOutcome::StorageFailure(StorageFailureKind::CatalogUnavailable);
            }
        };

        let validation = validate_cart(&request.cart, &catalog);

        if self.strict_cart && validation.matched_lines < request.cart.len() {
            tracing::warn!(
                matched = validation.matched_lines,
                lines = request.cart.len(),
                "cart references unknown product ids"
            );
            return CheckoutOutcome::PriceMismatch { catalog };
        }

        if !totals_match(validation.validated_total, request.client_total) {
            tracing::warn!(
                validated = %validation.validated_total,
                claimed = %request.client_total,
                "client total disagrees with server pricing"
            );
            return CheckoutOutcome::PriceMismatch { catalog };
        }

        if validation.stock_error {
            return CheckoutOutcome::InsufficientStock;
        }

        if validation.matched_lines == 0 {
            return CheckoutOutcome::NoMatchingProducts;
        }

        apply_stock_decrements(&request.cart, &mut catalog);

        if let Err(e) = self.store.save(&catalog).await {
            // The in-memory decrement is discarded with the snapshot; the
            // persisted document still holds the pre-settlement state.
            tracing::error!(error = %e, "failed to persist settled catalog");
            return CheckoutOutcome::StorageFailure(StorageFailureKind::SaveFailed);
        }

        tracing::info!(total = %validation.validated_total, "checkout settled");
        CheckoutOutcome::Success {
            validated_total: validation.validated_total,
            catalog,
        }
    }
}
