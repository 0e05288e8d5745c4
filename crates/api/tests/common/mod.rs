#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hacienda_api::config::ServerConfig;
use hacienda_api::ops::Dispatcher;
use hacienda_api::router::build_app_router;
use hacienda_api::state::AppState;
use hacienda_db::repositories::{InMemoryOwnerStore, InMemoryPropertyStore};
use hacienda_db::StorageBackend;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router over in-memory stores.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses. State lives behind the
/// router, so clone the returned `Router` per request instead of
/// rebuilding it.
pub fn build_test_app() -> Router {
    let config = test_config();
    let dispatcher = Dispatcher::new(
        Arc::new(InMemoryOwnerStore::new()),
        Arc::new(InMemoryPropertyStore::new()),
    );
    let state = AppState {
        dispatcher,
        config: Arc::new(config.clone()),
        backend: StorageBackend::Memory,
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, Some(body)).await
}

pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, path, Some(body)).await
}

pub async fn patch_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, path, Some(body)).await
}

pub async fn delete(app: Router, path: &str) -> Response<Body> {
    send(app, Method::DELETE, path, None).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
