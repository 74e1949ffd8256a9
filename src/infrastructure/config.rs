//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::infrastructure::anthropic::DEFAULT_ANTHROPIC_BASE_URL;

/// Environment variable holding the Anthropic API key
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Anthropic API base URL (the `/v1/messages` path is appended)
    pub anthropic_base_url: String,

    /// Variable the API key is read from on every request
    pub api_key_env: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// The API key is deliberately not read here; see [`AppConfig::resolve_api_key`].
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE_URL.to_string()),

            api_key_env: API_KEY_ENV.to_string(),
        })
    }

    /// Read the API key for the current request. Empty values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        env::var(&self.api_key_env).ok().filter(|key| !key.is_empty())
    }
}
