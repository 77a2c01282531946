use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicListFilter, TopicRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

/// Paginated, newest-first topic listing.
#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TopicListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TopicRecord>, GetTopicsError>;
}
