//! Domain Entities
//!
//! Request-scoped models without infrastructure dependencies.
//! - IncomingMessage: a user question as received, trimmed and normalized
//! - Reply: the single user-facing answer produced for every request

mod message;
mod reply;

pub use message::*;
pub use reply::*;
