//! Ask Application Service (Use Case)
//!
//! One reply per question: empty check, then small talk, then the model.

use std::sync::Arc;

use discbot::{classify, IncomingMessage, LlmProvider, Reply, SmallTalk};

use super::DomainResponder;

/// Application service for the `/ask` endpoint
pub struct AskService<P: LlmProvider + ?Sized> {
    responder: DomainResponder<P>,
}

impl<P: LlmProvider + ?Sized> AskService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            responder: DomainResponder::new(provider),
        }
    }

    /// Answer a raw message from the request body
    pub async fn ask(&self, raw: Option<&str>) -> Reply {
        let message = match IncomingMessage::parse(raw) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!("Rejected question: {}", err);
                return Reply::empty_input();
            }
        };

        match classify(message.normalized()) {
            SmallTalk::Matched(rule) => {
                tracing::debug!(rule = %rule, "💬 Small talk matched");
                Reply::small_talk(rule)
            }
            SmallTalk::NoMatch => self.responder.respond(&message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MockProvider, FAILURE_DETAIL};
    use discbot::{
        FailureKind, ReplySource, SmallTalkRule, EMPTY_INPUT_REPLY, FALLBACK_REPLY,
        MISSING_CREDENTIAL_REPLY,
    };

    fn service(provider: &Arc<MockProvider>) -> AskService<MockProvider> {
        AskService::new(provider.clone())
    }

    #[tokio::test]
    async fn test_empty_input_skips_everything() {
        let provider = Arc::new(MockProvider::answering("unused"));
        let service = service(&provider);

        for raw in [Some(""), Some("   "), Some("\n\t"), None] {
            let reply = service.ask(raw).await;
            assert_eq!(reply.text(), EMPTY_INPUT_REPLY);
            assert_eq!(reply.source(), ReplySource::EmptyInput);
        }
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_small_talk_never_calls_model() {
        let provider = Arc::new(MockProvider::answering("unused"));
        let service = service(&provider);

        let reply = service.ask(Some("Hello!")).await;
        assert_eq!(reply.source(), ReplySource::SmallTalk(SmallTalkRule::Greeting));

        let reply = service.ask(Some("thanks, what is discrete math?")).await;
        assert_eq!(
            reply.source(),
            ReplySource::SmallTalk(SmallTalkRule::DiscreteMathDefinition)
        );

        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_small_talk_is_idempotent() {
        let provider = Arc::new(MockProvider::answering("unused"));
        let service = service(&provider);

        let first = service.ask(Some("how are you?")).await;
        let second = service.ask(Some("how are you?")).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_domain_question_sent_trimmed() {
        let provider = Arc::new(MockProvider::answering("A **poset** is ..."));
        let service = service(&provider);

        let reply = service.ask(Some("  What is a Poset?  ")).await;

        assert_eq!(reply.text(), "A **poset** is ...");
        assert_eq!(provider.calls(), 1);
        assert_eq!(
            provider.last_prompt().as_deref(),
            Some("User Question: What is a Poset?")
        );
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let provider = Arc::new(MockProvider::without_credential());
        let service = service(&provider);

        let reply = service.ask(Some("Define a Hamiltonian cycle")).await;
        assert_eq!(reply.text(), MISSING_CREDENTIAL_REPLY);
        assert_eq!(provider.calls(), 0);

        // Small talk still works without a key
        let reply = service.ask(Some("hi")).await;
        assert_eq!(reply.source(), ReplySource::SmallTalk(SmallTalkRule::Greeting));
    }

    #[tokio::test]
    async fn test_failure_keeps_serving() {
        let provider = Arc::new(MockProvider::failing(FailureKind::RateLimited));
        let service = service(&provider);

        for _ in 0..3 {
            let reply = service.ask(Some("Solve a_n = 2a_{n-1} + 1")).await;
            assert_eq!(reply.text(), FALLBACK_REPLY);
            assert!(!reply.text().contains(FAILURE_DETAIL));
        }
        assert_eq!(provider.calls(), 3);
    }
}
