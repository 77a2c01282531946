use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::{
    api::schemas::ErrorBody,
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

/// Delete a topic
///
/// Hard delete; there is no tombstone to restore from.
#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = i32, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deleted"),
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
#[delete("/api/topics/{id}")]
pub async fn delete_topic_handler(
    _credentials: ClientCredentials,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(topic_id).await {
        Ok(true) => {
            info!(topic_id, "Deleted topic");
            ApiResponse::no_content()
        }
        Ok(false) => {
            warn!(topic_id, "Topic not found");
            ApiResponse::not_found("Topic not found")
        }
        Err(err) => {
            error!("Error deleting topic: {}", err);
            map_delete_topic_error(err)
        }
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> actix_web::HttpResponse {
    match err {
        DeleteTopicError::RepositoryError(_) => ApiResponse::internal_error(&err.to_string()),
    }
}
