//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::value_objects::FailureKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("External service error ({kind}): {detail}")]
    ExternalService { kind: FailureKind, detail: String },
}

impl DomainError {
    pub fn external<T: Into<String>>(kind: FailureKind, detail: T) -> Self {
        Self::ExternalService {
            kind,
            detail: detail.into(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::Configuration("remote service credential is not configured".to_string())
    }

    /// Failure classification for external service errors
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::ExternalService { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
