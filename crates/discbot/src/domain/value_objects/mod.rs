//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod failure_kind;
mod small_talk;

pub use failure_kind::*;
pub use small_talk::*;
