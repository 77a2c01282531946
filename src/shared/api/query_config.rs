// src/shared/api/query_config.rs
use crate::shared::api::ApiResponse;
use actix_web::http::StatusCode;
use actix_web::web::QueryConfig;

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::error_with_message(
                StatusCode::BAD_REQUEST,
                "Invalid query parameters",
                &message,
            ),
        )
        .into()
    })
}
