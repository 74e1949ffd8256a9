//! Value objects - Immutable objects defined by their attributes

mod generation;
mod mob_category;

pub use generation::{GeneratedConfig, GenerationRequest, GenerationRequestError};
pub use mob_category::MobCategory;
