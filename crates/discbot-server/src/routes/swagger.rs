//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AskRequest, AskResponse, HealthCheck};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::ask::ask,
        super::health::health_check,
    ),
    info(
        title = "DiscBot API",
        version = "0.1.0",
        description = "Discrete mathematics tutor.\n\nGreetings and meta-questions are answered locally; everything else goes to Gemini.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Ask", description = "Ask - Tutor question answering"),
    ),
    components(
        schemas(
            AskRequest,
            AskResponse,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/ask"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
