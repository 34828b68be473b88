//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{AuthService, SettlementEngine};
use crate::store::{CatalogStore, UserStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog store is held as a trait
/// object so tests can substitute in-memory and spy implementations.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog_store: Arc<dyn CatalogStore>,
    auth: AuthService,
    settlement: SettlementEngine,
}

impl AppState {
    /// Create a new application state over the given catalog store.
    ///
    /// The user directory and the settlement engine are derived from the
    /// configuration and the store.
    #[must_use]
    pub fn new(config: ServerConfig, catalog_store: Arc<dyn CatalogStore>) -> Self {
        let users = UserStore::new(config.users_path());
        let auth = AuthService::new(config.api_token.clone(), users);
        let settlement = SettlementEngine::new(Arc::clone(&catalog_store), config.strict_cart);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog_store,
                auth,
                settlement,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog_store(&self) -> &Arc<dyn CatalogStore> {
        &self.inner.catalog_store
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the settlement engine.
    #[must_use]
    pub fn settlement(&self) -> &SettlementEngine {
        &self.inner.settlement
    }
}
