use async_trait::async_trait;

use crate::topic::application::{
    ports::incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    ports::outgoing::TopicRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: i32) -> Result<bool, DeleteTopicError> {
        self.repository
            .delete_topic(topic_id)
            .await
            .map_err(|e| DeleteTopicError::RepositoryError(e.to_string()))
    }
}
