//! Mob generation service - prompt, one LLM call, section parsing
//!
//! Every call is independent: prompts are rebuilt from the request, the LLM is
//! called exactly once with no retry, and the reply is split into sections.
//! Nothing is kept between calls.

use crate::application::ports::outbound::{ChatMessage, LlmError, LlmPort, LlmRequest};
use crate::application::services::llm::{
    build_system_prompt, build_user_prompt, parse_generated_content, SectionParseError,
};
use crate::domain::value_objects::{GeneratedConfig, GenerationRequest};

/// Output budget for a single generation
pub const GENERATION_MAX_TOKENS: u32 = 8000;

/// Service that turns a generation request into MythicMobs configuration
pub struct MobGenerationService<L: LlmPort> {
    llm: L,
}

impl<L: LlmPort> MobGenerationService<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Generate configuration for a request
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedConfig, GenerationError> {
        let system_prompt = build_system_prompt(request);
        let user_prompt = build_user_prompt(request);

        let llm_request =
            LlmRequest::new(vec![ChatMessage::user(user_prompt)], GENERATION_MAX_TOKENS)
                .with_system_prompt(system_prompt);

        let response = self.llm.generate(llm_request).await?;
        tracing::debug!(
            model = %response.model,
            stop_reason = ?response.stop_reason,
            input_tokens = response.usage.map(|u| u.input_tokens),
            output_tokens = response.usage.map(|u| u.output_tokens),
            reply_len = response.content.len(),
            "LLM reply received"
        );

        let config = parse_generated_content(&response.content)?;
        Ok(config)
    }
}

/// Errors that can occur while generating configuration
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Parse(#[from] SectionParseError),
}
