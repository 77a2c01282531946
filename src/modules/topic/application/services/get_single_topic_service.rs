use async_trait::async_trait;

use crate::topic::application::{
    ports::incoming::use_cases::{GetSingleTopicError, GetSingleTopicUseCase},
    ports::outgoing::{TopicQuery, TopicRecord},
};

#[derive(Debug, Clone)]
pub struct GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleTopicUseCase for GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: i32) -> Result<TopicRecord, GetSingleTopicError> {
        let topic = self
            .query
            .get_by_id(topic_id)
            .await
            .map_err(|e| GetSingleTopicError::QueryFailed(e.to_string()))?;

        topic.ok_or(GetSingleTopicError::TopicNotFound)
    }
}
