use async_trait::async_trait;

use crate::topic::application::{
    ports::incoming::use_cases::{TopicCommand, UpdateTopicError, UpdateTopicUseCase},
    ports::outgoing::{TopicRecord, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: i32,
        command: TopicCommand,
    ) -> Result<TopicRecord, UpdateTopicError> {
        self.repository
            .update_topic(topic_id, command.into_data())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })
    }
}
