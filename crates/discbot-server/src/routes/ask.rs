//! Ask Routes - Tutor question answering
//!
//! HTTP handler that delegates to AskService. Always answers 200 with a
//! reply; failures are expressed in the reply text.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::models::{AskRequest, AskResponse};
use crate::AppState;

/// Ask DiscBot a question
#[utoipa::path(
    post,
    path = "/ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Reply from small talk, the model, or a friendly error", body = AskResponse)
    ),
    tag = "Ask"
)]
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Json<AskResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Unreadable /ask body: {}", rejection);
            AskRequest::default()
        }
    };

    let reply = state.ask_service.ask(request.message.as_deref()).await;

    tracing::info!("💬 /ask answered ({:?})", reply.source());

    Json(reply.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ask", post(ask))
}
