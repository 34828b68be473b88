//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MERCADITO_API_TOKEN` - Shared checkout secret handed out by login
//!   (min 16 chars, not a placeholder)
//!
//! ## Optional
//! - `MERCADITO_HOST` - Bind address (default: 127.0.0.1)
//! - `MERCADITO_PORT` - Listen port (default: 3000)
//! - `MERCADITO_DATA_DIR` - Directory holding `tienda.json` and
//!   `usuarios.json` (default: data)
//! - `MERCADITO_STRICT_CART` - Reject carts referencing unknown product ids
//!   (default: false, matching the original tolerant behavior)
//! - `MERCADITO_CORS_ORIGIN` - Allowed CORS origin (default: any)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_TOKEN_LENGTH: usize = 16;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// File name of the catalog document inside the data directory.
const CATALOG_FILE: &str = "tienda.json";
/// File name of the user directory inside the data directory.
const USERS_FILE: &str = "usuarios.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the data documents
    pub data_dir: PathBuf,
    /// Shared checkout secret
    pub api_token: SecretString,
    /// Reject carts referencing unknown product ids instead of silently
    /// skipping them
    pub strict_cart: bool,
    /// Allowed CORS origin; `None` means any origin
    pub cors_origin: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("api_token", &"[REDACTED]")
            .field("strict_cart", &self.strict_cart)
            .field("cors_origin", &self.cors_origin)
            .field("sentry_dsn", &self.sentry_dsn)
            .field("sentry_environment", &self.sentry_environment)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API token fails validation (placeholder/length check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MERCADITO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCADITO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MERCADITO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCADITO_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("MERCADITO_DATA_DIR", "data"));
        let api_token = get_validated_secret("MERCADITO_API_TOKEN")?;
        let strict_cart = get_env_or_default("MERCADITO_STRICT_CART", "false")
            .parse::<bool>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MERCADITO_STRICT_CART".to_string(), e.to_string())
            })?;
        let cors_origin = get_optional_env("MERCADITO_CORS_ORIGIN");
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            data_dir,
            api_token,
            strict_cart,
            cors_origin,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the persisted catalog document.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    /// Path of the user directory document.
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a secret is long enough and not an obvious placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {MIN_TOKEN_LENGTH} characters (got {})",
                secret.len()
            ),
        ));
    }

    let lower = secret.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
