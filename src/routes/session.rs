// src/routes/session.rs
// Registration and login

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde_json::{json, Value};

use crate::{auth, error::ApiError, state::AppState, store, validators};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (username, password) = credentials(&payload)?;

    let password_hash = auth::hash_password(password)?;
    store::users::create(&state.pool, username, &password_hash).await?;
    tracing::info!("Registered user {}", username);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    // A shape problem gets the same uniform rejection as a wrong password
    let (username, password) = credentials(&payload)
        .map_err(|_| ApiError::Auth("Invalid credentials".to_string()))?;

    let user = store::users::find_by_username(&state.pool, username).await?;
    let verified = user
        .as_ref()
        .map(|u| auth::verify_password(password, &u.password_hash))
        .unwrap_or(false);

    if !verified {
        return Err(ApiError::Auth("Invalid credentials".to_string()));
    }

    let token = state.tokens.issue(username)?;
    Ok(Json(json!({ "token": token })))
}

fn credentials(payload: &Value) -> Result<(&str, &str), ApiError> {
    let username = payload
        .get("username")
        .filter(|v| validators::is_valid_string(v))
        .and_then(Value::as_str);
    let password = payload
        .get("password")
        .filter(|v| validators::is_valid_string(v))
        .and_then(Value::as_str);

    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(ApiError::Validation(
            "username and password are required".to_string(),
        )),
    }
}
