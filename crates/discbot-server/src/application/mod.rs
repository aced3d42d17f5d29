//! Application Layer (Use Cases)
//!
//! Orchestrates the small-talk classifier and the remote model
//! into one reply per request.

mod ask_service;
mod responder;

#[cfg(test)]
pub(crate) mod testing;

pub use ask_service::AskService;
pub use responder::DomainResponder;
