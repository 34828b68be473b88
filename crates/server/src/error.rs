//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. Every failure still resolves to
//! the API's `{success, message}` envelope - the original never surfaces a
//! bare fault to the browser, and neither do we.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::AuthError;
use crate::store::StoreError;

/// Application-level error type for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A data document could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// The request body was not parseable.
    #[error("invalid payload")]
    InvalidPayload,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// The failure envelope shared by every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side errors to Sentry
        if matches!(
            self,
            Self::Store(_) | Self::Auth(AuthError::Store(_)) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Auth(AuthError::InvalidCredentials | AuthError::InvalidToken) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // The original answers data-file problems and bad payloads with
            // an HTTP 200 failure envelope; clients key off `success`
            Self::Store(_) | Self::Auth(AuthError::Store(_)) | Self::InvalidPayload => {
                StatusCode::OK
            }
        };

        // User-displayable messages; internals are never exposed
        let message = match &self {
            Self::Store(_) | Self::Auth(AuthError::Store(_)) => {
                "Error del servidor: Archivos de datos no encontrados.".to_string()
            }
            Self::Auth(AuthError::InvalidCredentials) => {
                "Usuario o contraseña incorrectos".to_string()
            }
            Self::Auth(AuthError::InvalidToken) => "Sesión no válida o expirada".to_string(),
            Self::InvalidPayload => "Datos inválidos".to_string(),
            Self::Internal(_) => "Error interno del servidor".to_string(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
