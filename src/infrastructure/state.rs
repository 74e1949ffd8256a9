//! Shared application state

use anyhow::{Context, Result};
use reqwest::Client;

use crate::infrastructure::config::AppConfig;

/// Shared application state
///
/// Holds nothing request-specific: configuration plus the pooled HTTP client
/// every outbound LLM call goes through. The client keeps reqwest's default
/// timeouts.
pub struct AppState {
    pub config: AppConfig,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
