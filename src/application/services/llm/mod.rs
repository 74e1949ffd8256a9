//! LLM prompt construction and reply parsing for mob generation

pub mod prompt_builder;
pub mod section_parser;

pub use prompt_builder::{build_system_prompt, build_user_prompt};
pub use section_parser::{parse_generated_content, SectionParseError};
