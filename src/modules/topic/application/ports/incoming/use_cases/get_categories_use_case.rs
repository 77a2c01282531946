use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Failed to fetch categories: {0}")]
    QueryFailed(String),
}

/// Distinct categories across the whole table, sorted ascending.
/// Unlike the catalog's category list this one is not capped.
#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetCategoriesError>;
}
