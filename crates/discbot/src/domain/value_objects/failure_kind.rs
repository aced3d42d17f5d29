//! FailureKind - Classification of remote service failures

/// Why a call to the remote text-generation service failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection or request could not be completed
    Transport,
    /// No response within the configured timeout
    Timeout,
    /// Quota exhausted (HTTP 429)
    RateLimited,
    /// Non-success HTTP status from the service
    Api,
    /// Response body could not be decoded
    Parse,
    /// Response decoded but contained no text
    EmptyResponse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RateLimited => write!(f, "rate_limited"),
            FailureKind::Api => write!(f, "api"),
            FailureKind::Parse => write!(f, "parse"),
            FailureKind::EmptyResponse => write!(f, "empty_response"),
        }
    }
}
