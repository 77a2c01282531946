use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete. Resolves to `false` when no topic with that id exists,
/// so callers can answer 404 without a prior lookup.
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: i32) -> Result<bool, DeleteTopicError>;
}
