use anyhow::{bail, Context, Result};

use crate::llm_client::ApiKey;
use crate::recommendation::builder::ResponseFormat;

/// Application configuration loaded from environment variables.
///
/// The OpenAI key is optional here: a request may carry its own key, and a
/// request with neither is rejected before any prompt is built.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<ApiKey>,
    pub openai_base_url: String,
    pub openai_max_tokens: u32,
    pub response_format: ResponseFormat,
    pub request_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().and_then(ApiKey::new),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            openai_max_tokens: std::env::var("OPENAI_MAX_TOKENS")
                .unwrap_or_else(|_| "512".to_string())
                .parse::<u32>()
                .context("OPENAI_MAX_TOKENS must be a positive integer")?,
            response_format: parse_response_format(
                &std::env::var("RESPONSE_FORMAT").unwrap_or_else(|_| "legacy".to_string()),
            )?,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_response_format(value: &str) -> Result<ResponseFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "legacy" => Ok(ResponseFormat::Legacy),
        "tagged" => Ok(ResponseFormat::Tagged),
        other => bail!("RESPONSE_FORMAT must be 'legacy' or 'tagged', got '{other}'"),
    }
}
