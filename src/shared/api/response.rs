// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Error body shared by every failing endpoint: `{"error": ...}` with an
/// optional human-readable `message`.
#[derive(Serialize, Clone)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body for 429 responses. `retry_after` is in seconds and mirrors the
/// `Retry-After` header.
#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitBody {
    pub error: String,
    pub note: String,
    pub retry_after: u64,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, error: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error: error.to_string(),
            message: None,
        })
    }

    pub fn error_with_message(status: StatusCode, error: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error: error.to_string(),
            message: Some(message.to_string()),
        })
    }

    pub fn bad_request(error: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, error)
    }

    pub fn not_found(error: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, error)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error_with_message(StatusCode::FORBIDDEN, "Forbidden", message)
    }

    pub fn internal_error(error: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    pub fn internal_error_with_message(error: &str, message: &str) -> HttpResponse {
        Self::error_with_message(StatusCode::INTERNAL_SERVER_ERROR, error, message)
    }

    /// 429 with a `Retry-After` header and the demo-facing note body.
    pub fn rate_limited(retry_after_secs: u64) -> HttpResponse {
        HttpResponse::TooManyRequests()
            .insert_header(("Retry-After", retry_after_secs.to_string()))
            .json(RateLimitBody {
                error: "Rate limit exceeded".to_string(),
                note: format!(
                    "This is a demonstration application with intentional rate limits. \
                     Please wait {} seconds before trying again.",
                    retry_after_secs
                ),
                retry_after: retry_after_secs,
            })
    }
}
