// src/routes/testcase.rs
// Restful test case API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::{parse_path_id, str_field};
use crate::{error::ApiError, models::TestCase, state::AppState, store, validators};

/// Collection endpoints: these sit behind the bearer-token gate.
pub fn collection_routes() -> Router<AppState> {
    Router::new().route(
        "/api/testcase",
        post(create_test_case).get(get_all_test_cases),
    )
}

/// Single-item endpoints, registered separately so route protection stays a
/// per-set decision.
pub fn item_routes() -> Router<AppState> {
    Router::new().route(
        "/api/testcase/:id",
        get(get_single_test_case)
            .put(update_test_case)
            .delete(delete_test_case),
    )
}

// Response shape shared by every test case endpoint; timestamps stay internal.
#[derive(Serialize)]
struct TestCaseBody {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<TestCase> for TestCaseBody {
    fn from(tc: TestCase) -> Self {
        Self {
            id: tc.id,
            name: tc.name,
            description: tc.description,
        }
    }
}

async fn create_test_case(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<TestCaseBody>), ApiError> {
    let (name, description) = test_case_fields(&payload)?;

    let test_case = store::test_cases::create(&state.pool, name, description).await?;
    Ok((StatusCode::CREATED, Json(test_case.into())))
}

async fn get_all_test_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestCaseBody>>, ApiError> {
    let test_cases = store::test_cases::list(&state.pool).await?;
    Ok(Json(test_cases.into_iter().map(Into::into).collect()))
}

async fn get_single_test_case(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TestCaseBody>, ApiError> {
    let id = parse_path_id(&raw_id)?;

    let test_case = store::test_cases::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Test case not found".to_string()))?;

    Ok(Json(test_case.into()))
}

async fn update_test_case(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<TestCaseBody>, ApiError> {
    let id = parse_path_id(&raw_id)?;
    let (name, description) = test_case_fields(&payload)?;

    let test_case = store::test_cases::update(&state.pool, id, name, description)
        .await?
        .ok_or_else(|| ApiError::NotFound("Test case not found".to_string()))?;

    Ok(Json(test_case.into()))
}

async fn delete_test_case(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_path_id(&raw_id)?;

    if !store::test_cases::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound("Test case not found".to_string()));
    }

    Ok(Json(json!({ "message": "Test case deleted successfully" })))
}

fn test_case_fields(payload: &Value) -> Result<(&str, Option<&str>), ApiError> {
    if !validators::is_valid_test_case_data(payload) {
        return Err(ApiError::Validation("Invalid test case data".to_string()));
    }

    // Safe after validation: name is present and a string
    let name = str_field(payload, "name").unwrap_or_default();
    let description = str_field(payload, "description");
    Ok((name, description))
}
