use anyhow::{anyhow, Context, Result};

use crate::agents::market_researcher::SearchFailurePolicy;
use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub search_failure_policy: SearchFailurePolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            search_failure_policy: std::env::var("SEARCH_FAILURE_POLICY")
                .unwrap_or_else(|_| "abort".to_string())
                .parse::<SearchFailurePolicy>()
                .map_err(|e| anyhow!(e))
                .context("SEARCH_FAILURE_POLICY must be 'abort' or 'degrade'")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        return Err(anyhow!("Required environment variable '{key}' is empty"));
    }
    Ok(value)
}
