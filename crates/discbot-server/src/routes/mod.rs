//! DiscBot API Routes
//!
//! - / - Chat page
//! - /ask - Question answering (small talk or Gemini)
//! - /health - Liveness check
//! - /swagger-ui - OpenAPI documentation

pub mod ask;
pub mod health;
pub mod home;
pub mod swagger;
