//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Content backend project id.
    pub project_id: String,

    /// Content backend dataset (default: "production").
    pub dataset: String,

    /// Content backend API version date (default: "2021-03-25").
    pub api_version: String,

    /// Read token for the authenticated preview path. When None, preview
    /// mode is disabled.
    pub preview_token: Option<String>,

    /// Per-request timeout for backend fetches, in seconds (default: 10).
    pub request_timeout_secs: u64,

    /// Output path for the generated theme config (default: ./theme.config.json).
    pub theme_config_path: PathBuf,

    /// Output path for the generated stylesheet (default: ./public/theme.styles.css).
    pub theme_styles_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let project_id = env::var("CONTENT_PROJECT_ID")
            .context("CONTENT_PROJECT_ID environment variable is required")?;

        let dataset = env::var("CONTENT_DATASET").unwrap_or_else(|_| "production".to_string());

        let api_version =
            env::var("CONTENT_API_VERSION").unwrap_or_else(|_| "2021-03-25".to_string());

        let preview_token = env::var("CONTENT_PREVIEW_TOKEN").ok().filter(|t| !t.is_empty());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        let theme_config_path = env::var("THEME_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./theme.config.json"));

        let theme_styles_path = env::var("THEME_STYLES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./public/theme.styles.css"));

        Ok(Self {
            port,
            project_id,
            dataset,
            api_version,
            preview_token,
            request_timeout_secs,
            theme_config_path,
            theme_styles_path,
        })
    }
}
