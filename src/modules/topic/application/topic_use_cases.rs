use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetCategoriesUseCase, GetSingleTopicUseCase,
    GetTopicCatalogUseCase, GetTopicsUseCase, UpdateTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_catalog: Arc<dyn GetTopicCatalogUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub get_categories: Arc<dyn GetCategoriesUseCase + Send + Sync>,
}
