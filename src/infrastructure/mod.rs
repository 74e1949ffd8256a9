//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Anthropic: LLM integration for configuration generation
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod anthropic;
pub mod config;
pub mod http;
pub mod state;
