//! Test doubles for the LLM provider port.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use discbot::{
    DomainError, FailureKind, GenerationRequest, GenerationResponse, LlmProvider, TokenUsage,
};

/// Detail attached to simulated failures; must never reach a reply
pub const FAILURE_DETAIL: &str = "simulated upstream failure: key=sk-test-123";

pub struct MockProvider {
    credential: bool,
    outcome: Result<String, FailureKind>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    pub fn answering(text: &str) -> Self {
        Self::build(true, Ok(text.to_string()))
    }

    pub fn failing(kind: FailureKind) -> Self {
        Self::build(true, Err(kind))
    }

    pub fn without_credential() -> Self {
        Self::build(false, Ok("unreachable".to_string()))
    }

    fn build(credential: bool, outcome: Result<String, FailureKind>) -> Self {
        Self {
            credential,
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt.clone());

        match &self.outcome {
            Ok(text) => Ok(GenerationResponse {
                text: text.clone(),
                model: "mock-model".to_string(),
                usage: TokenUsage::default(),
                finish_reason: Some("STOP".to_string()),
            }),
            Err(kind) => Err(DomainError::external(*kind, FAILURE_DETAIL)),
        }
    }

    fn has_credential(&self) -> bool {
        self.credential
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}
