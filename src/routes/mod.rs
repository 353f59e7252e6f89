// src/routes/mod.rs
// Route assembly. The bearer-token gate is attached per route set: the test
// case collection endpoints are always protected, the remaining /api routes
// only when auth.protect_all is configured.

use axum::{middleware, routing::get, Router};
use serde_json::Value;

use crate::{auth, error::ApiError, state::AppState, validators};

mod execution;
mod session;
mod testcase;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes(&state))
        .layer(middleware::from_fn(crate::error::handle_unexpected_errors))
        .with_state(state)
}

fn routes(state: &AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state.clone(), auth::require_auth);

    let mut open_api = Router::new()
        .merge(testcase::item_routes())
        .merge(execution::routes());
    if state.protect_all {
        open_api = open_api.route_layer(guard.clone());
    }

    Router::new()
        .route("/", get(root))
        .merge(session::routes())
        .merge(testcase::collection_routes().route_layer(guard))
        .merge(open_api)
}

async fn root() -> &'static str {
    "Hello, World!"
}

/// Validate a path id with the same digit rule applied to payload ids.
fn parse_path_id(raw: &str) -> Result<i64, ApiError> {
    if !validators::is_digits(raw) {
        return Err(ApiError::Validation(format!("Invalid id: {}", raw)));
    }
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("Invalid id: {}", raw)))
}

/// Shared helper for endpoints that take raw JSON and validate shape
/// themselves: pulls a string field out of an already-validated payload.
fn str_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}
