// src/routes/execution.rs
// Restful execution result API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::{parse_path_id, str_field};
use crate::{error::ApiError, models::ExecutionResult, state::AppState, store, validators};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/execution", post(record_execution_result))
        .route("/api/execution/:test_case_id", get(get_execution_results))
}

async fn record_execution_result(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if !validators::is_valid_execution_data(&payload) {
        return Err(ApiError::Validation(
            "test_case_id and result are required".to_string(),
        ));
    }

    let test_case_id = payload
        .get("test_case_id")
        .and_then(validators::as_integer)
        .ok_or_else(|| ApiError::Validation("Invalid test_case_id".to_string()))?;
    let result = str_field(&payload, "result").unwrap_or_default();

    let record = store::executions::create(&state.pool, test_case_id, result).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": record.id,
            "test_case_id": record.test_case_id,
            "result": record.result,
        })),
    ))
}

/// Lists every recorded result for a test case id. An id with no records
/// yields an empty list, not a 404.
async fn get_execution_results(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ExecutionResult>>, ApiError> {
    let test_case_id = parse_path_id(&raw_id)?;

    let results = store::executions::list_for_test_case(&state.pool, test_case_id).await?;
    Ok(Json(results))
}
