// src/store/test_cases.rs

use sqlx::{Result, SqlitePool};

use super::now_millis;
use crate::models::TestCase;

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    description: Option<&str>,
) -> Result<TestCase> {
    let now = now_millis();

    sqlx::query_as::<_, TestCase>(
        "INSERT INTO test_cases (name, description, created_at, updated_at) \
         VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<TestCase>> {
    sqlx::query_as::<_, TestCase>("SELECT * FROM test_cases ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<TestCase>> {
    sqlx::query_as::<_, TestCase>("SELECT * FROM test_cases WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Replaces name and description, refreshing `updated_at` from the server
/// clock. `created_at` is never touched. Returns None for an unknown id.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    description: Option<&str>,
) -> Result<Option<TestCase>> {
    sqlx::query_as::<_, TestCase>(
        "UPDATE test_cases SET name = ?, description = ?, updated_at = ? \
         WHERE id = ? RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns false when no row had the given id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM test_cases WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
