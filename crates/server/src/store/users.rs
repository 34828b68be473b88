//! User directory backed by `usuarios.json`.
//!
//! The document is re-read on every login, mirroring the original's
//! per-request file read: edits to the file take effect without a restart.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;

use super::StoreError;

/// One entry of the user directory.
#[derive(Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "user")]
    pub username: String,
    #[serde(rename = "pass")]
    pub password: String,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Read access to the user directory document.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store backed by the document at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Check a username/password pair against the directory.
    ///
    /// Comparison is exact, like the original's simulated auth. Returns
    /// `Ok(false)` for wrong credentials; errors only for store problems.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the document is absent, unreadable or
    /// malformed.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let records = self.load().await?;
        Ok(records
            .iter()
            .any(|u| u.username == username && u.password == password))
    }

    async fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            source: e,
        })
    }
}
