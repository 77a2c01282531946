// src/modules/topic/application/ports/outgoing/topic_query.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::topic_repository::TopicRecord;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicListFilter {
    pub category: Option<String>,
}

impl TopicListFilter {
    /// Builds a filter from the raw `category` query parameter.
    /// `"all"` and the empty string mean "no filter".
    pub fn from_category_param(category: Option<String>) -> Self {
        let category = category.filter(|c| !c.is_empty() && c != "all");
        Self { category }
    }
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    /// `total_pages` is the ceiling of `total / page_size`, so an empty
    /// table yields zero pages.
    pub fn new(items: Vec<T>, total: u64, page: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: page.page,
            page_size: page.page_size,
            total_pages: total.div_ceil(page.page_size as u64),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Newest-first listing with optional category filter and pagination.
    async fn list(
        &self,
        filter: TopicListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TopicRecord>, TopicQueryError>;

    async fn get_by_id(&self, topic_id: i32) -> Result<Option<TopicRecord>, TopicQueryError>;

    /// The `limit` newest topics across all categories.
    async fn newest(&self, limit: u64) -> Result<Vec<TopicRecord>, TopicQueryError>;

    /// Distinct categories over the whole table, sorted ascending.
    async fn categories(&self) -> Result<Vec<String>, TopicQueryError>;
}
