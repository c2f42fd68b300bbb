//! Shared utilities for integration tests.

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use form_routes::config::ServerConfig;
use form_routes::{HttpServer, RouteTable};
use tower::ServiceExt;

/// The application's default table.
pub fn default_table() -> Arc<RouteTable> {
    Arc::new(RouteTable::default_table().unwrap())
}

/// Router for the resolution service over `table`.
#[allow(dead_code)]
pub fn app(table: Arc<RouteTable>) -> Router {
    HttpServer::new(table, &ServerConfig::default()).router()
}

/// Send a GET and return status, headers and parsed JSON body (Null when empty).
#[allow(dead_code)]
pub async fn get(
    app: Router,
    uri: &str,
) -> (axum::http::StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}
