// src/db.rs
// Database pool setup and schema creation

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Executor, Result};
use std::str::FromStr;

use crate::config::Config;

pub async fn init_db(config: &Config) -> Result<SqlitePool> {
    // Clone the values we need for the closure
    let wal_enabled = config.database.wal;
    let wal_autocheckpoint = config.database.wal_autocheckpoint;

    let options = SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if wal_enabled {
                    sqlx::query("PRAGMA journal_mode = WAL")
                        .execute(&mut *conn)
                        .await?;

                    sqlx::query(&format!("PRAGMA wal_autocheckpoint = {}", wal_autocheckpoint))
                        .execute(&mut *conn)
                        .await?;

                    // NORMAL is sufficient with WAL
                    sqlx::query("PRAGMA synchronous = NORMAL")
                        .execute(&mut *conn)
                        .await?;
                }
                Ok(())
            })
        })
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create the schema if it is absent. The migration file only contains
/// IF NOT EXISTS statements, so this is safe to run on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    pool.execute(include_str!("../migrations/casebook.sql"))
        .await?;
    Ok(())
}
