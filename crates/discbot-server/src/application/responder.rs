//! Domain Responder
//!
//! Sends non-small-talk questions to the remote model. Every outcome is
//! turned into a `Reply`; errors are logged here and never reach the caller.

use std::sync::Arc;

use discbot::{
    DomainError, GenerationRequest, GenerationResponse, IncomingMessage, LlmProvider, Reply,
};

/// Remote model responder
pub struct DomainResponder<P: LlmProvider + ?Sized> {
    provider: Arc<P>,
}

impl<P: LlmProvider + ?Sized> DomainResponder<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Answer a question with the model, or a canned error reply
    pub async fn respond(&self, message: &IncomingMessage) -> Reply {
        match self.generate(message).await {
            Ok(response) => {
                tracing::info!(
                    "🤖 Answered via {} ({}) - {} tokens, finish: {}",
                    self.provider.provider_name(),
                    response.model,
                    response.usage.total_tokens,
                    response.finish_reason.as_deref().unwrap_or("unknown")
                );
                Reply::generated(&response.text)
            }
            Err(DomainError::Configuration(detail)) => {
                tracing::warn!("⚠️  Skipping model call: {}", detail);
                Reply::missing_credential()
            }
            Err(err) => {
                tracing::error!(
                    provider = self.provider.provider_name(),
                    model = self.provider.model_id(),
                    kind = ?err.failure_kind(),
                    "❌ Error generating response: {}",
                    err
                );
                Reply::fallback()
            }
        }
    }

    async fn generate(
        &self,
        message: &IncomingMessage,
    ) -> Result<GenerationResponse, DomainError> {
        if !self.provider.has_credential() {
            return Err(DomainError::missing_credential());
        }

        let request = GenerationRequest::for_question(message.trimmed());
        self.provider.generate(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MockProvider;
    use discbot::{FailureKind, ReplySource, FALLBACK_REPLY, MISSING_CREDENTIAL_REPLY};

    #[tokio::test]
    async fn test_success_is_trimmed() {
        let provider = Arc::new(MockProvider::answering(
            "  **Euler paths** visit every edge once.\n",
        ));
        let responder = DomainResponder::new(provider.clone());

        let reply = responder
            .respond(&IncomingMessage::new("What is an Euler path?"))
            .await;

        assert_eq!(reply.text(), "**Euler paths** visit every edge once.");
        assert_eq!(reply.source(), ReplySource::Model);
        assert_eq!(
            provider.last_prompt().as_deref(),
            Some("User Question: What is an Euler path?")
        );
    }

    #[tokio::test]
    async fn test_missing_credential_skips_call() {
        let provider = Arc::new(MockProvider::without_credential());
        let responder = DomainResponder::new(provider.clone());

        let reply = responder
            .respond(&IncomingMessage::new("What is a bijection?"))
            .await;

        assert_eq!(reply.text(), MISSING_CREDENTIAL_REPLY);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_failures_become_fallback() {
        for kind in [
            FailureKind::Transport,
            FailureKind::Timeout,
            FailureKind::RateLimited,
            FailureKind::Api,
            FailureKind::Parse,
            FailureKind::EmptyResponse,
        ] {
            let provider = Arc::new(MockProvider::failing(kind));
            let responder = DomainResponder::new(provider.clone());

            let reply = responder
                .respond(&IncomingMessage::new("Count the subsets of {1,2,3}"))
                .await;

            assert_eq!(reply.text(), FALLBACK_REPLY);
            assert_eq!(reply.source(), ReplySource::Fallback);
            assert_eq!(provider.calls(), 1);
        }
    }
}
