use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::{
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetSingleTopicError,
    AppState,
};

#[get("/api/topics/{id}")]
pub async fn get_single_topic_handler(
    _credentials: ClientCredentials,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_single.execute(topic_id).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_get_single_topic_error(topic_id, err),
    }
}

fn map_get_single_topic_error(topic_id: i32, err: GetSingleTopicError) -> HttpResponse {
    match err {
        GetSingleTopicError::TopicNotFound => {
            warn!(topic_id, "Topic not found");
            ApiResponse::not_found("Topic not found")
        }
        other => {
            error!("Error fetching topic: {}", other);
            ApiResponse::internal_error(&other.to_string())
        }
    }
}
