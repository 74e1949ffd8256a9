use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{GeneratedConfig, GenerationRequest, GenerationRequestError};

/// Category label used when the caller sends none
pub const DEFAULT_CATEGORY: &str = "regular";

/// Body of `POST /api/generate`
///
/// Only `prompt` is validated. The other fields accept any JSON type: flags
/// are read by truthiness and text fields render non-strings as JSON text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequestDto {
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub reference: Option<Value>,
    #[serde(default)]
    pub use_libs_disguises: Option<Value>,
    #[serde(default)]
    pub include_items: Option<Value>,
    #[serde(default)]
    pub include_drops: Option<Value>,
    #[serde(default)]
    pub advanced_skills: Option<Value>,
}

impl TryFrom<GenerateRequestDto> for GenerationRequest {
    type Error = GenerationRequestError;

    fn try_from(dto: GenerateRequestDto) -> Result<Self, Self::Error> {
        let prompt = match dto.prompt {
            Some(Value::String(prompt)) => prompt,
            _ => return Err(GenerationRequestError::MissingPrompt),
        };
        let category = dto
            .category
            .and_then(value_text)
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let reference = dto
            .reference
            .filter(is_truthy)
            .and_then(value_text);

        Ok(GenerationRequest::new(category, prompt)?
            .with_reference(reference)
            .with_libs_disguises(flag(&dto.use_libs_disguises))
            .with_items(flag(&dto.include_items))
            .with_drops(flag(&dto.include_drops))
            .with_advanced_skills(flag(&dto.advanced_skills)))
    }
}

/// `false`, `null`, zero and the empty string are falsy; everything else is truthy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn flag(value: &Option<Value>) -> bool {
    value.as_ref().is_some_and(is_truthy)
}

/// Text form of a field value; `null` counts as absent
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Successful response: one YAML blob per section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedConfigDto {
    pub mobs: String,
    pub skills: String,
    pub items: String,
    pub drops: String,
}

impl From<GeneratedConfig> for GeneratedConfigDto {
    fn from(config: GeneratedConfig) -> Self {
        Self {
            mobs: config.mobs,
            skills: config.skills,
            items: config.items,
            drops: config.drops,
        }
    }
}

/// Error body shared by every failure response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponseDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
