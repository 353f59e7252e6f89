// src/error.rs
// Request error taxonomy and last-resort error normalization

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input, rejected before any store mutation.
    #[error("{0}")]
    Validation(String),
    /// Missing, malformed, or expired bearer token.
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    NotFound(String),
    /// Duplicate username on registration.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return ApiError::Conflict("Username already exists".to_string());
            }
        }
        tracing::warn!("Unexpected database error: {}", e);
        ApiError::Internal(e.to_string())
    }
}

/// Middleware that catches handler panics and normalizes non-JSON error
/// bodies (e.g. extractor rejections) into the `{"error": ...}` shape.
pub async fn handle_unexpected_errors(req: Request<Body>, next: Next) -> Response {
    let result = std::panic::AssertUnwindSafe(next.run(req))
        .catch_unwind()
        .await;

    let response = match result {
        Ok(resp) => resp,
        Err(_) => {
            let body = json!({ "error": "An unexpected error occurred" });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };

    if response.status().is_client_error() || response.status().is_server_error() {
        let status = response.status();

        let body_bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|_| Bytes::new());

        // Already our JSON shape: pass through untouched
        if serde_json::from_slice::<serde_json::Value>(&body_bytes).is_ok() {
            return (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                body_bytes,
            )
                .into_response();
        }

        let msg = String::from_utf8_lossy(&body_bytes).to_string();
        let msg = if msg.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            msg
        };

        return (status, Json(json!({ "error": msg }))).into_response();
    }

    response
}
