//! Health - Liveness check

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
    /// Whether a Gemini credential was loaded at startup
    pub model_configured: bool,
}
