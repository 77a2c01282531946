use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::{
    api::schemas::{ErrorBody, TopicResponse},
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    suggestion::application::ports::incoming::use_cases::GenerateSuggestionsError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Generate AI suggestions for a topic
///
/// Counts against the caller's rate budget, asks the generation service for
/// content, sanitizes it and stores it on the topic. Returns the updated
/// topic. Previously stored suggestions survive any failure.
#[utoipa::path(
    post,
    path = "/api/topics/{id}/suggestions",
    tag = "topics",
    params(("id" = i32, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Suggestions generated and stored", body = TopicResponse),
        (
            status = 404,
            description = "Topic not found",
            body = ErrorBody,
            example = json!({"error": "Topic not found"})
        ),
        (status = 429, description = "Caller exceeded the per-window request budget"),
        (status = 500, description = "Generation or persistence failed", body = ErrorBody),
        (status = 403, description = "Missing or invalid credentials", body = ErrorBody)
    ),
    security(("ApiKeyAuth" = [], "CorsToken" = []))
)]
#[post("/api/topics/{id}/suggestions")]
pub async fn generate_suggestions_handler(
    credentials: ClientCredentials,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let topic_id = path.into_inner();

    // The API key doubles as the rate limiting identity.
    match data
        .generate_suggestions_use_case
        .execute(topic_id, &credentials.api_key)
        .await
    {
        Ok(record) => {
            info!(topic_id, "Generated AI suggestions");
            ApiResponse::success(record)
        }
        Err(err) => map_generate_suggestions_error(topic_id, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_generate_suggestions_error(topic_id: i32, err: GenerateSuggestionsError) -> HttpResponse {
    match err {
        GenerateSuggestionsError::RateLimited { retry_after_secs } => {
            warn!(topic_id, retry_after_secs, "Suggestion request rate limited");
            ApiResponse::rate_limited(retry_after_secs)
        }
        GenerateSuggestionsError::TopicNotFound => {
            warn!(topic_id, "Topic not found");
            ApiResponse::not_found("Topic not found")
        }
        GenerateSuggestionsError::PersistFailed(msg) => {
            error!(topic_id, "Failed to store suggestions: {}", msg);
            ApiResponse::internal_error("Failed to update suggestions")
        }
        other => {
            error!(topic_id, "Error generating suggestions: {}", other);
            ApiResponse::internal_error_with_message(
                "Failed to generate AI suggestions",
                &other.to_string(),
            )
        }
    }
}
