//! Application layer - Use cases, ports and DTOs
//!
//! This layer contains:
//! - Services: the mob generation use case
//! - Ports: interfaces to external systems (the LLM provider)
//! - DTOs: JSON shapes at the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
