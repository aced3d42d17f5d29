//! Reply Entity
//!
//! The single user-facing answer produced for every request, whether it
//! came from the small-talk rules, the model, or an error path.

use crate::domain::value_objects::SmallTalkRule;

/// Reply for empty or whitespace-only input
pub const EMPTY_INPUT_REPLY: &str = "Please type a question!";

/// Reply when the remote service credential is not configured
pub const MISSING_CREDENTIAL_REPLY: &str =
    "API Key is missing or failed to load. Please check your .env file.";

/// Reply when the remote service call fails for any reason
pub const FALLBACK_REPLY: &str = "Oops! I hit a snag while trying to compute that. \
The server might be busy or your API quota may be exceeded. \
Could you please try rephrasing your discrete math question?";

/// Where a reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Empty input, nothing was classified or generated
    EmptyInput,
    /// Canned small-talk answer
    SmallTalk(SmallTalkRule),
    /// Generated by the remote model
    Model,
    /// Credential missing, no remote call attempted
    MissingCredential,
    /// Remote call failed
    Fallback,
}

/// Reply - immutable answer text with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    text: String,
    source: ReplySource,
}

impl Reply {
    pub fn empty_input() -> Self {
        Self {
            text: EMPTY_INPUT_REPLY.to_string(),
            source: ReplySource::EmptyInput,
        }
    }

    pub fn small_talk(rule: SmallTalkRule) -> Self {
        Self {
            text: rule.reply().to_string(),
            source: ReplySource::SmallTalk(rule),
        }
    }

    /// Wrap model output, trimming surrounding whitespace
    pub fn generated(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            source: ReplySource::Model,
        }
    }

    pub fn missing_credential() -> Self {
        Self {
            text: MISSING_CREDENTIAL_REPLY.to_string(),
            source: ReplySource::MissingCredential,
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_string(),
            source: ReplySource::Fallback,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> ReplySource {
        self.source
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
