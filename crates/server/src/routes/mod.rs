//! HTTP route handlers for the API server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (probes the catalog store)
//!
//! # API
//! POST /api/login     - Verify credentials, hand out the checkout token
//!                       and the full catalog
//! POST /api/checkout  - Validate and settle a cart
//! ```
//!
//! Both API endpoints speak the `{success, message, ...}` envelope of the
//! original system; checkout failures other than authentication are
//! HTTP 200 with `success:false`.

pub mod checkout;
pub mod login;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login::login))
        .route("/checkout", post(checkout::checkout))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}
