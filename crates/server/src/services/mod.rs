//! Application services.
//!
//! - [`auth`] - shared-secret credential and token verification
//! - [`settlement`] - the validate-then-commit checkout engine

pub mod auth;
pub mod settlement;

pub use auth::{AuthError, AuthService, TokenVerifier};
pub use settlement::SettlementEngine;
