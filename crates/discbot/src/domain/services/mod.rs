//! Domain Services
//!
//! Stateless domain logic shared by every request.

mod instruction;
mod small_talk;

pub use instruction::*;
pub use small_talk::*;
