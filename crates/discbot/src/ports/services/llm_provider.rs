//! LLM Provider Port
//!
//! Abstract interface for the remote text-generation service that answers
//! domain questions. Implementations live in the server crate (Gemini) and
//! in tests (mocks).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::services::{build_prompt, SYSTEM_INSTRUCTION};

/// Single-turn generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// System instruction (persona and formatting rules)
    pub system_instruction: String,
    /// The only user turn
    pub prompt: String,
}

impl GenerationRequest {
    /// Tutor request for a user question
    pub fn for_question(question: &str) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(question),
        }
    }
}

/// Response from the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text content
    pub text: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// LLM Provider interface
///
/// # Example
///
/// ```rust,ignore
/// use discbot::ports::LlmProvider;
///
/// struct GeminiProvider { /* ... */ }
///
/// #[async_trait]
/// impl LlmProvider for GeminiProvider {
///     async fn generate(&self, request: &GenerationRequest)
///         -> Result<GenerationResponse, DomainError> {
///         // Call Gemini API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a response for a single-turn request
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, DomainError>;

    /// Whether a credential is configured; callers must not invoke
    /// `generate` when this is false
    fn has_credential(&self) -> bool;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
