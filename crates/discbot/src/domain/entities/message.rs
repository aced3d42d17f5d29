//! Incoming Message Entity
//!
//! A user question as received by the `/ask` endpoint.

use crate::domain::errors::DomainError;

/// A user question, kept in raw, trimmed and normalized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Text exactly as received
    raw: String,
    /// Leading/trailing whitespace removed
    trimmed: String,
    /// Trimmed and lower-cased, used for classification
    normalized: String,
}

impl IncomingMessage {
    /// Create a message from raw text (may be blank)
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim().to_string();
        let normalized = trimmed.to_lowercase();
        Self {
            raw,
            trimmed,
            normalized,
        }
    }

    /// Parse an optional payload field, rejecting missing or blank text
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let message = Self::new(raw.unwrap_or_default());
        if message.is_blank() {
            return Err(DomainError::Validation("message is empty".to_string()));
        }
        Ok(message)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn trimmed(&self) -> &str {
        &self.trimmed
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}
