use axum::Router;
use discbot::LlmProvider;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::GeminiProvider;
use application::AskService;
use config::AppConfig;

/// Application service over whichever provider was configured at startup
pub type AppAskService = AskService<dyn LlmProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub ask_service: Arc<AppAskService>,
    pub model_configured: bool,
}

impl AppState {
    /// Wire the Gemini provider from config
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::new(config)?);
        Ok(Self {
            model_configured: provider.has_credential(),
            ask_service: Arc::new(AskService::new(provider)),
        })
    }
}

/// Build the full router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::home::router())
        .merge(routes::health::router())
        .merge(routes::ask::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🧮 DiscBot API initializing...");

    // Local .env is optional; Shuttle secrets take precedence
    if dotenvy::dotenv().is_ok() {
        tracing::info!("📄 Loaded .env file");
    }

    let config = AppConfig::load(&secrets)?;

    if config.has_api_key() {
        tracing::info!("✅ {} loaded successfully", config::API_KEY_VAR);
    } else {
        tracing::warn!(
            "⚠️  No {} set - model answers disabled, small talk only",
            config::API_KEY_VAR
        );
    }

    let state = AppState::from_config(&config)?;

    tracing::info!(
        "🤖 Gemini model: {} (timeout {:?})",
        config.gemini_model,
        config.request_timeout
    );

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ DiscBot API ready");

    Ok(router.into())
}
