use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    pub api_prefix: String,
    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,
    pub rate_per_min: u32,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: var("SERVER_ADDR", "0.0.0.0:8000"),
            database_url: var("DATABASE_URL", "sqlite://hrms.db"),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", &var("DB_MAX_CONNECTIONS", "5"))?,

            api_prefix: var("API_PREFIX", ""),
            cors_origins: parse_origins(&var("CORS_ORIGINS", "http://localhost:3000")),
            rate_per_min: parse_var("RATE_PER_MIN", &var("RATE_PER_MIN", "1000"))?,

            log_dir: var("LOG_DIR", "logs"),
            log_level: parse_var("LOG_LEVEL", &var("LOG_LEVEL", "debug"))?,
        })
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key} has an invalid value: {raw:?}"))
}

// Browsers send the Origin header without a trailing slash.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
