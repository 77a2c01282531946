// src/api/schemas.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A stored topic as it appears on the wire
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    #[schema(example = 42)]
    pub id: i32,

    #[schema(example = "Rust Ownership")]
    pub title: String,

    #[schema(example = "How moves, borrows and lifetimes fit together")]
    pub description: String,

    #[schema(example = "Programming")]
    pub category: String,

    /// Sanitized HTML fragment; null until suggestions have been generated
    #[schema(example = "<div class=\"suggestions\"><ul><li>idea</li></ul></div>")]
    pub ai_suggestions: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Standard error body
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    #[schema(example = "Topic not found")]
    pub error: String,

    /// Extra context, present only on some failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
