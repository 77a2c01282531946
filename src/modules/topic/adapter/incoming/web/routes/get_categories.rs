use actix_web::{get, web, Responder};
use tracing::{error, info};

use crate::{
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetCategoriesError,
    AppState,
};

/// Plain JSON array of distinct categories, sorted ascending.
#[get("/api/categories")]
pub async fn get_categories_handler(
    _credentials: ClientCredentials,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.get_categories.execute().await {
        Ok(categories) => {
            info!(count = categories.len(), "Fetched categories");
            ApiResponse::success(categories)
        }
        Err(err) => map_get_categories_error(err),
    }
}

fn map_get_categories_error(err: GetCategoriesError) -> actix_web::HttpResponse {
    error!("Error fetching categories: {}", err);
    match err {
        GetCategoriesError::QueryFailed(_) => ApiResponse::internal_error("Failed to fetch categories"),
    }
}
