//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Narrative service base URL (OpenAI-compatible); `None` routes every
    /// generation to the local fallback
    pub narrative_base_url: Option<String>,
    /// Model used for narrative requests
    pub narrative_model: String,
    /// Timeout for one narrative request, in seconds
    pub narrative_timeout_secs: u64,

    /// Directory for the persisted state slots
    pub data_dir: PathBuf,

    /// Delay between roll phases, in milliseconds
    pub roll_pacing_ms: u64,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            narrative_base_url: env::var("NARRATIVE_BASE_URL").ok(),
            narrative_model: env::var("NARRATIVE_MODEL")
                .unwrap_or_else(|_| "llama3.2".to_string()),
            narrative_timeout_secs: env::var("NARRATIVE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("NARRATIVE_TIMEOUT_SECS must be a number of seconds")?,

            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),

            roll_pacing_ms: env::var("ROLL_PACING_MS")
                .unwrap_or_else(|_| "800".to_string())
                .parse()
                .context("ROLL_PACING_MS must be a number of milliseconds")?,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
