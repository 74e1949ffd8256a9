//! Application services - Use case implementations
//!
//! Services depend only on outbound ports, never on concrete infrastructure.

pub mod generation_service;
pub mod llm;

pub use generation_service::{GenerationError, MobGenerationService};
