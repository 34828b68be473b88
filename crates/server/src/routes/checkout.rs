//! Checkout route handler.
//!
//! The endpoint is a thin boundary: parse leniently, authenticate before
//! any store access, hand the request to the settlement engine, and shape
//! its outcome into the response contract.

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use mercadito_core::{Catalog, CheckoutOutcome, CheckoutRequest, StorageFailureKind};

use crate::error::{AppError, Result};
use crate::services::{AuthError, TokenVerifier};
use crate::state::AppState;

/// Checkout response body.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    #[serde(
        rename = "total_validado",
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub validated_total: Option<Decimal>,
    /// Corrected catalog snapshot, present on success and on price
    /// mismatch so the client can resynchronize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Catalog>,
}

impl CheckoutResponse {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            validated_total: None,
            data: None,
        }
    }
}

/// Validate and settle a cart.
#[instrument(skip_all)]
pub async fn checkout(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Response> {
    let Ok(Json(request)) = payload else {
        return Err(AppError::InvalidPayload);
    };

    // Authentication comes first; the store is never touched for an
    // unauthorized request
    if !state.auth().verify_token(&request.token) {
        return Err(AppError::Auth(AuthError::InvalidToken));
    }

    let outcome = state.settlement().settle(&request).await;
    Ok(outcome_response(outcome).into_response())
}

/// Map a settlement outcome onto the response contract.
fn outcome_response(outcome: CheckoutOutcome) -> (StatusCode, Json<CheckoutResponse>) {
    let (status, response) = match outcome {
        CheckoutOutcome::Success {
            validated_total,
            catalog,
        } => (
            StatusCode::OK,
            CheckoutResponse {
                success: true,
                message: "Compra realizada con éxito".to_string(),
                validated_total: Some(validated_total),
                data: Some(catalog),
            },
        ),
        CheckoutOutcome::PriceMismatch { catalog } => (
            StatusCode::OK,
            CheckoutResponse {
                success: false,
                message:
                    "El precio de los productos ha cambiado o es incorrecto. Se han actualizado los datos."
                        .to_string(),
                validated_total: None,
                data: Some(catalog),
            },
        ),
        CheckoutOutcome::InsufficientStock => (
            StatusCode::OK,
            CheckoutResponse::failure("No hay suficiente stock para algunos productos."),
        ),
        CheckoutOutcome::NoMatchingProducts => (
            StatusCode::OK,
            CheckoutResponse::failure("No se pudo procesar ningún producto"),
        ),
        CheckoutOutcome::EmptyCart => (
            StatusCode::OK,
            CheckoutResponse::failure("El carrito está vacío"),
        ),
        CheckoutOutcome::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            CheckoutResponse::failure("Sesión no válida o expirada"),
        ),
        CheckoutOutcome::StorageFailure(StorageFailureKind::CatalogUnavailable) => (
            StatusCode::OK,
            CheckoutResponse::failure("Error del servidor: Base de datos no encontrada"),
        ),
        CheckoutOutcome::StorageFailure(StorageFailureKind::SaveFailed) => (
            StatusCode::OK,
            CheckoutResponse::failure("Error al guardar los datos de la compra"),
        ),
    };

    (status, Json(response))
}
