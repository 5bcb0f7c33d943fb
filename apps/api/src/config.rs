use anyhow::{Context, Result};

use crate::errors::AppError;
use crate::llm_client::{InferenceConfig, GROQ_API_URL};
use crate::ui::theme::Theme;

/// Application configuration loaded from environment variables.
/// Startup fails if the Groq credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub inference: InferenceConfig,
    pub theme: Theme,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require_env(&lookup, "GROQ_API_KEY")?;

        let max_upload_mb = lookup("MAX_UPLOAD_MB")
            .unwrap_or_else(|| "200".to_string())
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;

        Ok(Config {
            inference: InferenceConfig {
                api_key,
                api_url: lookup("GROQ_API_URL").unwrap_or_else(|| GROQ_API_URL.to_string()),
            },
            theme: lookup("THEME")
                .map(|t| t.parse::<Theme>())
                .transpose()?
                .unwrap_or_default(),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::MissingCredential(key.to_string()).into()),
    }
}
