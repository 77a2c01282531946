use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::topic::application::ports::outgoing::{TopicListFilter, TopicRecord};

/// Upper bound on how many topics the flat listing ever serves.
/// Embedded clients page nothing, so the feed is capped at the
/// newest rows instead.
pub const CATALOG_CAP: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCatalog {
    pub items: Vec<TopicRecord>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicCatalogError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

/// Flat topic listing for clients that render everything at once.
/// `categories` always reflects the capped, unfiltered feed, even when
/// `filter` narrows `items` down to one category.
#[async_trait]
pub trait GetTopicCatalogUseCase: Send + Sync {
    async fn execute(&self, filter: TopicListFilter) -> Result<TopicCatalog, GetTopicCatalogError>;
}
