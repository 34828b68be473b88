//! Integration tests for the login endpoint.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use mercadito_server::config::ServerConfig;
use mercadito_server::routes;
use mercadito_server::state::AppState;
use mercadito_server::store::JsonCatalogStore;

const TOKEN: &str = "CLAVE_SEGURA_TIENDA_2025";

fn config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        data_dir: data_dir.to_path_buf(),
        api_token: SecretString::from(TOKEN),
        strict_cart: false,
        cors_origin: None,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

async fn seeded_app(seed_files: bool) -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");

    if seed_files {
        tokio::fs::write(
            dir.path().join("tienda.json"),
            r#"{
                "productos": [
                    {"id": 1, "nombre": "Camiseta", "precio": 10.0, "stock": 5,
                     "id_categoria": 1, "destacado": false, "img": ""}
                ],
                "categorias": [{"id": 1, "nombre": "Ropa"}]
            }"#,
        )
        .await
        .expect("write catalog");
        tokio::fs::write(
            dir.path().join("usuarios.json"),
            r#"[{"user": "ana", "pass": "ana123"}]"#,
        )
        .await
        .expect("write users");
    }

    let config = config(dir.path());
    let store = Arc::new(JsonCatalogStore::new(config.catalog_path()));
    let app = routes::routes().with_state(AppState::new(config, store));
    (dir, app)
}

async fn post_login(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn test_login_returns_token_and_catalog() {
    let (_dir, app) = seeded_app(true).await;

    let body = json!({"usuario": "ana", "password": "ana123"}).to_string();
    let (status, response) = post_login(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["message"], "Login correcto");
    assert_eq!(response["token"], TOKEN);
    assert_eq!(response["data"]["productos"][0]["nombre"], "Camiseta");
    assert_eq!(response["data"]["categorias"][0]["nombre"], "Ropa");
}

#[tokio::test]
async fn test_wrong_credentials_are_unauthorized() {
    let (_dir, app) = seeded_app(true).await;

    let body = json!({"usuario": "ana", "password": "wrong"}).to_string();
    let (status, response) = post_login(app, body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["success"], false);
    assert_eq!(response["message"], "Usuario o contraseña incorrectos");
}

#[tokio::test]
async fn test_malformed_body_counts_as_empty_credentials() {
    let (_dir, app) = seeded_app(true).await;

    let (status, response) = post_login(app, "not json at all".to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn test_missing_data_files_is_a_server_error_envelope() {
    let (_dir, app) = seeded_app(false).await;

    let body = json!({"usuario": "ana", "password": "ana123"}).to_string();
    let (status, response) = post_login(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], false);
    assert_eq!(
        response["message"],
        "Error del servidor: Archivos de datos no encontrados."
    );
}
