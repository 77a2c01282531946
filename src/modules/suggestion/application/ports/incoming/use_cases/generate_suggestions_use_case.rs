use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateSuggestionsError {
    /// The caller key exhausted its request budget for the current window.
    #[error("Rate limit exceeded")]
    RateLimited { retry_after_secs: u64 },

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    LookupFailed(String),

    #[error("Failed to generate AI suggestions: {0}")]
    GenerationFailed(String),

    #[error("Failed to update suggestions: {0}")]
    PersistFailed(String),
}

#[async_trait]
pub trait GenerateSuggestionsUseCase: Send + Sync {
    /// Generates suggestions for the topic and persists them, returning the
    /// updated record. `caller_key` identifies the client for rate limiting.
    async fn execute(
        &self,
        topic_id: i32,
        caller_key: &str,
    ) -> Result<TopicRecord, GenerateSuggestionsError>;
}
