// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Tokens stay valid for 30 days unless JWT_EXPIRATION says otherwise.
pub const DEFAULT_JWT_EXPIRATION: u64 = 30 * 24 * 60 * 60;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub bind_addr: String,
    /// Generation endpoints answer 503 when this is unset.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let jwt_expiration = parse_expiration(env::var("JWT_EXPIRATION").ok().as_deref());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let gemini_model = env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            bind_addr,
            gemini_api_key,
            gemini_model,
        }
    }
}

/// Log filter directives from `RUST_LOG`.
///
/// Read on its own so tracing can be installed before [`Config::from_env`] runs
/// and logs its warnings.
pub fn log_filter() -> String {
    dotenv().ok();
    filter_or_default(env::var("RUST_LOG").ok())
}

fn filter_or_default(raw: Option<String>) -> String {
    raw.filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn parse_expiration(raw: Option<&str>) -> u64 {
    match raw.map(str::trim).map(str::parse::<u64>) {
        Some(Ok(seconds)) if seconds > 0 => seconds,
        Some(_) => {
            tracing::warn!("Ignoring invalid JWT_EXPIRATION, using {}s", DEFAULT_JWT_EXPIRATION);
            DEFAULT_JWT_EXPIRATION
        }
        None => DEFAULT_JWT_EXPIRATION,
    }
}
