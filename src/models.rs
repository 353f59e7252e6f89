// src/models.rs
// Persisted entities and token claims

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named, described unit of testable intent. Timestamps are unix
/// milliseconds; `updated_at` is refreshed server-side on every update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestCase {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Outcome record for a single run of a test case. Append-only; the
/// `test_case_id` is a soft reference and is not existence-checked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExecutionResult {
    pub id: i64,
    pub test_case_id: i64,
    pub result: String,
    pub execution_time: i64,
}

#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// JWT payload: subject is the username, expiry is unix seconds.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}
