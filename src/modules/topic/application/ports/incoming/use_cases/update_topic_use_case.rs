use async_trait::async_trait;

use super::topic_command::TopicCommand;
use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full replace of a topic's editable fields. Stored AI suggestions
/// survive the update.
#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: i32,
        command: TopicCommand,
    ) -> Result<TopicRecord, UpdateTopicError>;
}
