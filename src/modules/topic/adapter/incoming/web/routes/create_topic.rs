use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorBody, TopicResponse},
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicError, TopicCommand, TopicCommandError,
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
pub struct CreateTopicRequest {
    /// 3 to 100 characters
    #[schema(example = "Rust Ownership")]
    pub title: String,

    /// 10 to 500 characters
    #[schema(example = "How moves, borrows and lifetimes fit together")]
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

/// Create a topic
///
/// Validates the payload and stores a new topic. `aiSuggestions` starts out null.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicResponse),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorBody,
            example = json!({"error": "Title must be between 3 and 100 characters"})
        ),
        (status = 403, description = "Missing or invalid credentials", body = ErrorBody)
    ),
    security(("ApiKeyAuth" = [], "CorsToken" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    _credentials: ClientCredentials,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
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
    match data.topic.create.execute(command).await {
        Ok(record) => {
            info!(topic_id = record.id, "Created new topic");
            ApiResponse::created(record)
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

// The 400 body carries the validation message as `error`.
fn map_command_error(err: TopicCommandError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(&err.to_string())
}

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    error!("Error creating topic: {}", err);
    match err {
        CreateTopicError::RepositoryError(_) => ApiResponse::bad_request(&err.to_string()),
    }
}
