// src/state.rs
// Application state module

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::{auth::TokenService, config::Config, db};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub protect_all: bool,
}

pub async fn init_state(config: &Config) -> anyhow::Result<AppState> {
    let pool = db::init_db(config).await?;
    let secret = config.auth.secret()?;
    let tokens = TokenService::new(
        secret.as_bytes(),
        Duration::from_secs(config.auth.token_ttl_minutes * 60),
    );

    Ok(AppState {
        pool,
        tokens: Arc::new(tokens),
        protect_all: config.auth.protect_all,
    })
}
