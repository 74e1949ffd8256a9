//! Domain layer - Core generation concepts with no I/O
//!
//! This layer contains:
//! - Value Objects: mob categories, generation requests, generated configuration

pub mod value_objects;
