//! Login route handler.
//!
//! Login is simulated auth: the credential pair is matched against the
//! user directory and the response carries the server-wide checkout token
//! plus the full catalog, so the client starts with fresh prices and stock.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use mercadito_core::Catalog;

use crate::error::Result;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "usuario", default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    /// Full catalog so the client can seed its local product cache.
    pub data: Catalog,
}

/// Verify credentials and hand out the checkout token.
///
/// A malformed body is treated as empty credentials, which fail
/// verification - the original defaults missing fields the same way.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let request = payload.map_or_else(|_| LoginRequest::default(), |Json(request)| request);

    // The catalog must be readable before credentials are even considered;
    // a login without catalog data would strand the client
    let catalog = state.catalog_store().load().await?;

    let token = state
        .auth()
        .login(&request.username, &request.password)
        .await?;

    tracing::info!(user = %request.username, "login accepted");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login correcto".to_string(),
        token,
        data: catalog,
    }))
}
