// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::{get, post},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

use linkdrop_server::handlers;
use linkdrop_server::handlers::metadata::USER_AGENT;
use linkdrop_server::state::AppState;

/// Outbound client configured like production: browser User-Agent and a short
/// timeout so tests against dead endpoints fail fast.
pub fn test_client() -> reqwest::Client {
    test_client_with_timeout(Duration::from_secs(3))
}

/// Outbound client with an explicit fetch timeout, for tests that exercise
/// timeout expiry against a deliberately slow upstream.
pub fn test_client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build test HTTP client")
}

/// Build the application router wired to the given outbound client.
pub fn create_test_app(http: reqwest::Client) -> Router {
    let state = AppState { http };
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metadata/fetch", post(handlers::metadata::fetch_metadata))
        .with_state(state)
}

/// POST a JSON body and return (status, parsed response body).
pub async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// GET a path and return (status, parsed response body).
pub async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
