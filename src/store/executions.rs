// src/store/executions.rs

use sqlx::{Result, SqlitePool};

use super::now_millis;
use crate::models::ExecutionResult;

/// Append an execution result. The referenced test case is not
/// existence-checked; the id is stored as given.
pub async fn create(
    pool: &SqlitePool,
    test_case_id: i64,
    result: &str,
) -> Result<ExecutionResult> {
    sqlx::query_as::<_, ExecutionResult>(
        "INSERT INTO execution_results (test_case_id, result, execution_time) \
         VALUES (?, ?, ?) RETURNING *",
    )
    .bind(test_case_id)
    .bind(result)
    .bind(now_millis())
    .fetch_one(pool)
    .await
}

pub async fn list_for_test_case(
    pool: &SqlitePool,
    test_case_id: i64,
) -> Result<Vec<ExecutionResult>> {
    sqlx::query_as::<_, ExecutionResult>(
        "SELECT * FROM execution_results WHERE test_case_id = ? ORDER BY id",
    )
    .bind(test_case_id)
    .fetch_all(pool)
    .await
}
