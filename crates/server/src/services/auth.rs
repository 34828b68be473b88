//! Authentication service.
//!
//! The original system simulates auth: login checks the user directory by
//! direct comparison and hands out a single server-wide secret that the
//! checkout endpoint later matches against. [`TokenVerifier`] is the seam
//! where signed per-session tokens could be swapped in without touching
//! settlement logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::store::{StoreError, UserStore};

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The presented checkout token does not match the shared secret.
    #[error("invalid or expired token")]
    InvalidToken,

    /// The user directory could not be read.
    #[error("user directory error: {0}")]
    Store(#[from] StoreError),
}

/// Verifies request tokens.
pub trait TokenVerifier: Send + Sync {
    /// Whether `token` authorizes the request.
    fn verify_token(&self, token: &str) -> bool;
}

/// Shared-secret authentication.
pub struct AuthService {
    token: SecretString,
    users: UserStore,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(token: SecretString, users: UserStore) -> Self {
        Self { token, users }
    }

    /// Verify a username/password pair and issue the checkout token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair does not match
    /// any directory entry, or `AuthError::Store` if the directory cannot
    /// be read.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if self.users.verify(username, password).await? {
            Ok(self.token.expose_secret().to_string())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

impl TokenVerifier for AuthService {
    fn verify_token(&self, token: &str) -> bool {
        token == self.token.expose_secret()
    }
}
