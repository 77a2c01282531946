use async_trait::async_trait;

use super::topic_command::TopicCommand;
use crate::topic::application::ports::outgoing::TopicRecord;

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: TopicCommand) -> Result<TopicRecord, CreateTopicError>;
}
