use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// Input DTO for creating or fully replacing a topic
#[derive(Debug, Clone)]
pub struct NewTopicData {
    pub title: String,
    pub description: String,
    pub category: String,
}

// Unified output DTO for all topic operations that return topic data.
// Field names serialize in camelCase to match the public wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub ai_suggestions: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn insert_topic(&self, data: NewTopicData) -> Result<TopicRecord, TopicRepositoryError>;

    /// Full replace of `title`, `description` and `category`.
    /// `ai_suggestions` and `created_at` are left untouched.
    async fn update_topic(
        &self,
        topic_id: i32,
        data: NewTopicData,
    ) -> Result<TopicRecord, TopicRepositoryError>;

    /// Returns `true` when a row was actually removed.
    async fn delete_topic(&self, topic_id: i32) -> Result<bool, TopicRepositoryError>;

    async fn save_suggestions(
        &self,
        topic_id: i32,
        suggestions: String,
    ) -> Result<TopicRecord, TopicRepositoryError>;
}
