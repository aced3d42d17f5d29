//! DiscBot Data Models
//!
//! - Ask: question/reply payloads for `POST /ask`
//! - Health: liveness check payload

mod ask;
mod health;

pub use ask::*;
pub use health::*;
