//! Generation request and result value objects
//!
//! Both live for a single request only: a `GenerationRequest` is built from the
//! incoming payload, turned into prompts, and the model's reply comes back as a
//! `GeneratedConfig`.

use super::MobCategory;

/// A validated request to generate MythicMobs configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Category label exactly as the caller sent it (echoed back into the prompts)
    pub category: String,
    /// Natural-language description of the mob(s); never blank
    pub prompt: String,
    /// Existing mob or concept to base the output on
    pub reference: Option<String>,
    pub use_libs_disguises: bool,
    pub include_items: bool,
    pub include_drops: bool,
    pub advanced_skills: bool,
}

impl GenerationRequest {
    /// Create a request with every optional feature turned off.
    ///
    /// Fails when `prompt` is empty or whitespace only. The prompt itself is
    /// kept untrimmed.
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<Self, GenerationRequestError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(GenerationRequestError::MissingPrompt);
        }

        Ok(Self {
            category: category.into(),
            prompt,
            reference: None,
            use_libs_disguises: false,
            include_items: false,
            include_drops: false,
            advanced_skills: false,
        })
    }

    /// Empty references are treated as absent
    pub fn with_reference(mut self, reference: Option<String>) -> Self {
        self.reference = reference.filter(|r| !r.is_empty());
        self
    }

    pub fn with_libs_disguises(mut self, enabled: bool) -> Self {
        self.use_libs_disguises = enabled;
        self
    }

    pub fn with_items(mut self, enabled: bool) -> Self {
        self.include_items = enabled;
        self
    }

    pub fn with_drops(mut self, enabled: bool) -> Self {
        self.include_drops = enabled;
        self
    }

    pub fn with_advanced_skills(mut self, enabled: bool) -> Self {
        self.advanced_skills = enabled;
        self
    }

    /// Category used to pick guidance text; unknown labels resolve to `Regular`
    pub fn category_kind(&self) -> MobCategory {
        MobCategory::from_label(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationRequestError {
    #[error("Prompt is required")]
    MissingPrompt,
}

/// Configuration sections extracted from a model reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedConfig {
    pub mobs: String,
    pub skills: String,
    pub items: String,
    pub drops: String,
}
