use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Path to the versioned model artifact (skills, careers, samples, weights).
    pub model_artifact_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the best-effort analytics write. The response never
    /// waits longer than this on the recorder.
    pub recorder_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            model_artifact_path: require_env("MODEL_ARTIFACT_PATH")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recorder_timeout_ms: std::env::var("RECORDER_TIMEOUT_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse::<u64>()
                .context("RECORDER_TIMEOUT_MS must be a number of milliseconds")?,
        })
    }

    pub fn recorder_timeout(&self) -> Duration {
        Duration::from_millis(self.recorder_timeout_ms)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
