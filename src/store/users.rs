// src/store/users.rs

use sqlx::{Result, SqlitePool};

use crate::models::User;

/// Insert a new user. A duplicate username surfaces as a database unique
/// violation, which the caller maps to a conflict.
pub async fn create(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(username)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}
