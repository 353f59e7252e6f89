// src/config.rs
// Configuration handling module

use serde::Deserialize;
use std::env;
use std::fs;

/// Environment variable that overrides `auth.secret_path` as the source of
/// the token signing secret.
pub const SECRET_ENV_VAR: &str = "CASEBOOK_AUTH_SECRET";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    #[serde(default = "default_wal")]
    pub wal: bool,
    #[serde(default = "default_wal_autocheckpoint")]
    pub wal_autocheckpoint: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret_path: Option<String>,
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: u64,
    /// Extends the bearer-token gate to every /api route. Off by default:
    /// only the test case collection endpoints are protected.
    #[serde(default)]
    pub protect_all: bool,
}

fn default_wal() -> bool {
    true
}

fn default_wal_autocheckpoint() -> i32 {
    1000
}

fn default_token_ttl_minutes() -> u64 {
    30
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let env_name = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
        let config_path =
            env::var("APP_CONFIG").unwrap_or_else(|_| format!("config/{}.toml", env_name));

        let config_str = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&config_str)?;

        if env::var(SECRET_ENV_VAR).is_err() && config.auth.secret_path.is_none() {
            anyhow::bail!(
                "No token secret configured: set {} or auth.secret_path",
                SECRET_ENV_VAR
            );
        }

        Ok(config)
    }
}

impl AuthConfig {
    /// Resolve the token signing secret. The environment variable wins over
    /// the secret file so deployments can rotate without touching disk.
    pub fn secret(&self) -> anyhow::Result<String> {
        if let Ok(secret) = env::var(SECRET_ENV_VAR) {
            return Ok(secret);
        }

        let path = self
            .secret_path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("auth.secret_path is not configured"))?;

        let secret = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read secret file {}: {}", path, e))?
            .trim()
            .to_string();

        if secret.is_empty() {
            anyhow::bail!("Secret file {} is empty", path);
        }

        Ok(secret)
    }
}
