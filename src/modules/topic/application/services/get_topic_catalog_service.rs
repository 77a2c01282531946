use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::topic::application::{
    ports::incoming::use_cases::{
        GetTopicCatalogError, GetTopicCatalogUseCase, TopicCatalog, CATALOG_CAP,
    },
    ports::outgoing::{TopicListFilter, TopicQuery},
};

#[derive(Debug, Clone)]
pub struct GetTopicCatalogService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicCatalogService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicCatalogUseCase for GetTopicCatalogService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, filter: TopicListFilter) -> Result<TopicCatalog, GetTopicCatalogError> {
        // One unfiltered fetch; the category list must cover the whole
        // capped feed no matter what the caller filters on.
        let items = self
            .query
            .newest(CATALOG_CAP)
            .await
            .map_err(|e| GetTopicCatalogError::QueryFailed(e.to_string()))?;

        let categories: Vec<String> = items
            .iter()
            .map(|topic| topic.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let items = match filter.category {
            Some(category) => items
                .into_iter()
                .filter(|topic| topic.category == category)
                .collect(),
            None => items,
        };

        Ok(TopicCatalog { items, categories })
    }
}
