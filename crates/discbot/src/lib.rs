//! DiscBot Domain Library
//!
//! Core domain types and interfaces for the DiscBot discrete-math tutor.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Request-scoped models (IncomingMessage, Reply)
//!   - `value_objects/`: Immutable value types (SmallTalk, FailureKind)
//!   - `services/`: Small-talk classifier and tutor instruction
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (LLM provider)
//!
//! # Usage
//!
//! ```rust,ignore
//! use discbot::domain::{classify, IncomingMessage, SmallTalk};
//! use discbot::ports::LlmProvider;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_prompt, classify, DomainError, FailureKind, IncomingMessage, Reply, ReplySource,
    SmallTalk, SmallTalkRule, EMPTY_INPUT_REPLY, FALLBACK_REPLY, MISSING_CREDENTIAL_REPLY,
    SYSTEM_INSTRUCTION,
};
pub use ports::{GenerationRequest, GenerationResponse, LlmProvider, TokenUsage};
