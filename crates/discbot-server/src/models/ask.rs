//! Ask - Question and reply payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use discbot::Reply;

// ============================================
// Request/Response DTOs
// ============================================

/// Ask request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AskRequest {
    /// The user's question; missing or blank asks the user to retype
    #[serde(default)]
    #[schema(example = "What is a bipartite graph?")]
    pub message: Option<String>,
}

/// Ask response, returned with HTTP 200 for every outcome
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    pub reply: String,
}

impl From<Reply> for AskResponse {
    fn from(reply: Reply) -> Self {
        Self {
            reply: reply.into_text(),
        }
    }
}
