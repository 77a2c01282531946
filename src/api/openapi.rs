use actix_web::{get, web, Responder};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorBody, TopicResponse};

// Topics
use crate::topic::adapter::incoming::web::routes::{CreateTopicRequest, UpdateTopicRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Topic Response AI API",
        version = "1.0.0",
        description = "API documentation for the topic catalog and AI content suggestion service",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,

        // Suggestion endpoints
        crate::suggestion::adapter::incoming::web::routes::generate_suggestions_handler,

        // Read endpoints
        // crate::topic::adapter::incoming::web::routes::get_topics_handler,
        // crate::topic::adapter::incoming::web::routes::get_single_topic_handler,
        // crate::topic::adapter::incoming::web::routes::get_categories_handler,
    ),
    components(
        schemas(
            TopicResponse,
            ErrorBody,

            // Topic DTOs
            CreateTopicRequest,
            UpdateTopicRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic catalog and AI suggestion endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "ApiKeyAuth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "x-api-key",
                    "Shared API key",
                ))),
            );
            components.add_security_scheme(
                "CorsToken",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "x-cors-token",
                    "Shared CORS token",
                ))),
            );
        }
    }
}

/// The document is public; browsing it needs no credentials.
#[get("/api/docs/openapi.json")]
pub async fn openapi_spec_handler() -> impl Responder {
    web::Json(ApiDoc::openapi())
}
