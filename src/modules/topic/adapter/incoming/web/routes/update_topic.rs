use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorBody, TopicResponse},
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        TopicCommand, TopicCommandError, UpdateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    /// 3 to 100 characters
    #[schema(example = "Rust Ownership, revisited")]
    pub title: String,

    /// 10 to 500 characters
    #[schema(example = "A second pass over moves and borrows")]
    pub description: String,

    /// 2 to 50 characters
    #[schema(example = "Programming")]
    pub category: String,

    /// `existing` or `new`; a form discriminator, never persisted
    #[schema(example = "existing")]
    pub category_type: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Replace a topic
///
/// Full replace of title, description and category. Stored AI suggestions
/// and the creation timestamp are left untouched.
#[utoipa::path(
    put,
    path = "/api/topics/{id}",
    tag = "topics",
    request_body = UpdateTopicRequest,
    params(("id" = i32, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic updated", body = TopicResponse),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorBody,
            example = json!({"error": "Description must be between 10 and 500 characters"})
        ),
        (
            status = 404,
            description = "No topic with that id",
            body = ErrorBody,
            example = json!({"error": "Topic not found"})
        ),
        (status = 403, description = "Missing or invalid credentials", body = ErrorBody)
    ),
    security(("ApiKeyAuth" = [], "CorsToken" = []))
)]
#[put("/api/topics/{id}")]
pub async fn update_topic_handler(
    _credentials: ClientCredentials,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let payload = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match TopicCommand::new(
        payload.title,
        payload.description,
        payload.category,
        payload.category_type,
    ) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.topic.update.execute(topic_id, command).await {
        Ok(record) => {
            info!(topic_id, "Updated topic");
            ApiResponse::success(record)
        }
        Err(err) => map_update_topic_error(topic_id, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: TopicCommandError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(&err.to_string())
}

fn map_update_topic_error(topic_id: i32, err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => {
            warn!(topic_id, "Topic not found");
            ApiResponse::not_found("Topic not found")
        }
        other => {
            error!("Error updating topic: {}", other);
            ApiResponse::bad_request(&other.to_string())
        }
    }
}
