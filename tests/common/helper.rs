// Test helper functions
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use casebook::auth::TokenService;
use casebook::{db, routes, state::AppState};

/// Fresh application state backed by an in-memory database. One connection
/// only, so every request sees the same store.
#[allow(dead_code)]
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to create schema");

    AppState {
        pool,
        tokens: Arc::new(TokenService::new(
            b"integration-test-secret",
            Duration::from_secs(30 * 60),
        )),
        protect_all: false,
    }
}

#[allow(dead_code)]
pub fn app(state: &AppState) -> Router {
    routes::app(state.clone())
}

/// Dispatch a request in-process and parse the JSON body. Non-JSON bodies
/// come back as `Value::Null`.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, token, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[allow(dead_code)]
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to dispatch request");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    (status, bytes.to_vec())
}

/// Register a user and log in, returning the issued bearer token.
#[allow(dead_code)]
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let credentials = json!({ "username": username, "password": password });

    let (status, _) = send(app, Method::POST, "/register", None, Some(&credentials)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, Method::POST, "/login", None, Some(&credentials)).await;
    assert_eq!(status, StatusCode::OK);

    body["token"]
        .as_str()
        .expect("Expected token in login response")
        .to_string()
}

/// Create a test case through the API, asserting success.
#[allow(dead_code)]
pub async fn create_test_case(app: &Router, token: &str, payload: &Value) -> Value {
    let (status, body) = send(app, Method::POST, "/api/testcase", Some(token), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
