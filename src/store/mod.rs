// src/store/mod.rs
// Persistence layer. Each function is one atomic operation against the pool;
// "not found" is an explicit None, never an error.

pub mod executions;
pub mod test_cases;
pub mod users;

use std::time::{SystemTime, UNIX_EPOCH};

// Server-side clock for created_at / updated_at / execution_time.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
