use async_trait::async_trait;

use crate::topic::application::{
    ports::incoming::use_cases::{GetCategoriesError, GetCategoriesUseCase},
    ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetCategoriesError> {
        self.query
            .categories()
            .await
            .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))
    }
}
