//! LLM port - Interface for language model interactions

use async_trait::async_trait;

/// Port for LLM (Large Language Model) interactions
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Generate a response from the LLM
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

/// Request to the LLM
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    /// The conversation history
    pub messages: Vec<ChatMessage>,
    /// System prompt / context
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>, max_tokens: u32) -> Self {
        Self {
            messages,
            system_prompt: None,
            max_tokens,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
}

/// Response from the LLM
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// Text of the first content block
    pub content: String,
    /// Model that produced the reply
    pub model: String,
    /// Why generation stopped, as reported by the provider
    pub stop_reason: Option<String>,
    /// Token usage
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors returned by an LLM provider
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The request never produced an HTTP response
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The provider answered with a non-success status
    #[error("LLM API returned status {status}: {body}")]
    Api { status: u16, body: String },
    /// The provider answered, but not with anything usable
    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),
}
