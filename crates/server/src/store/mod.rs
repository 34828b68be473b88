//! Document store access for the server.
//!
//! Two file-backed documents, read and written wholesale:
//!
//! - `tienda.json` - the catalog (products + categories), behind the
//!   [`CatalogStore`] trait so settlement logic can be tested against
//!   in-memory and spy implementations
//! - `usuarios.json` - the login user directory
//!
//! `load` never silently defaults: checkout must not proceed on absent or
//! malformed pricing data, so both cases surface as [`StoreError`].

pub mod catalog;
pub mod users;

pub use catalog::JsonCatalogStore;
pub use users::UserStore;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use mercadito_core::Catalog;

/// Errors raised by document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing document does not exist.
    #[error("document not found: {path}")]
    NotFound { path: PathBuf },

    /// The backing document exists but is not valid JSON for its schema.
    #[error("malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document could not be encoded for persistence.
    #[error("failed to encode document for {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Underlying filesystem failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read/write access to the persisted catalog document.
///
/// `save` overwrites the document entirely - last writer wins, no merge,
/// no versioning. Callers needing read-modify-write atomicity must
/// serialize themselves (the settlement engine holds a mutex across the
/// whole sequence).
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load the current catalog snapshot.
    async fn load(&self) -> Result<Catalog, StoreError>;

    /// Persist the catalog, replacing the previous document.
    async fn save(&self, catalog: &Catalog) -> Result<(), StoreError>;
}
