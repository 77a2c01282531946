use async_trait::async_trait;

use crate::suggestion::application::ports::incoming::use_cases::{
    GenerateSuggestionsError, GenerateSuggestionsUseCase,
};
use crate::tests::support::topic_test_fixtures::empty_page_result;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase, DeleteTopicError, DeleteTopicUseCase,
    GetCategoriesError, GetCategoriesUseCase, GetSingleTopicError, GetSingleTopicUseCase,
    GetTopicCatalogError, GetTopicCatalogUseCase, GetTopicsError, GetTopicsUseCase, TopicCatalog,
    TopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicListFilter, TopicRecord,
};

// ============================================================
// Topic use case stubs
// ============================================================

#[derive(Clone)]
pub struct StubCreateTopicUseCase {
    result: Result<TopicRecord, CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn success(record: TopicRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: TopicCommand) -> Result<TopicRecord, CreateTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<PageResult<TopicRecord>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(page: PageResult<TopicRecord>) -> Self {
        Self { result: Ok(page) }
    }

    pub fn empty() -> Self {
        Self {
            result: Ok(empty_page_result()),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(
        &self,
        _filter: TopicListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<TopicRecord>, GetTopicsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTopicCatalogUseCase {
    result: Result<TopicCatalog, GetTopicCatalogError>,
}

impl StubGetTopicCatalogUseCase {
    pub fn success(catalog: TopicCatalog) -> Self {
        Self {
            result: Ok(catalog),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicCatalogError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicCatalogUseCase for StubGetTopicCatalogUseCase {
    async fn execute(&self, _filter: TopicListFilter) -> Result<TopicCatalog, GetTopicCatalogError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleTopicUseCase {
    result: Result<TopicRecord, GetSingleTopicError>,
}

impl StubGetSingleTopicUseCase {
    pub fn found(record: TopicRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleTopicError::TopicNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSingleTopicError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSingleTopicUseCase for StubGetSingleTopicUseCase {
    async fn execute(&self, _topic_id: i32) -> Result<TopicRecord, GetSingleTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    result: Result<TopicRecord, UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn success(record: TopicRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(UpdateTopicError::TopicNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(UpdateTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(
        &self,
        _topic_id: i32,
        _command: TopicCommand,
    ) -> Result<TopicRecord, UpdateTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<bool, DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn deleted() -> Self {
        Self { result: Ok(true) }
    }

    pub fn missing() -> Self {
        Self { result: Ok(false) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(DeleteTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: i32) -> Result<bool, DeleteTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetCategoriesUseCase {
    result: Result<Vec<String>, GetCategoriesError>,
}

impl StubGetCategoriesUseCase {
    pub fn success(categories: Vec<&str>) -> Self {
        Self {
            result: Ok(categories.into_iter().map(String::from).collect()),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetCategoriesError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<String>, GetCategoriesError> {
        self.result.clone()
    }
}

// ============================================================
// Suggestion use case stub
// ============================================================

#[derive(Clone)]
pub struct StubGenerateSuggestionsUseCase {
    result: Result<TopicRecord, GenerateSuggestionsError>,
}

impl StubGenerateSuggestionsUseCase {
    pub fn success(record: TopicRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self {
            result: Err(GenerateSuggestionsError::RateLimited { retry_after_secs }),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GenerateSuggestionsError::TopicNotFound),
        }
    }

    pub fn generation_failed(msg: &str) -> Self {
        Self {
            result: Err(GenerateSuggestionsError::GenerationFailed(msg.to_string())),
        }
    }

    pub fn persist_failed(msg: &str) -> Self {
        Self {
            result: Err(GenerateSuggestionsError::PersistFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GenerateSuggestionsUseCase for StubGenerateSuggestionsUseCase {
    async fn execute(
        &self,
        _topic_id: i32,
        _caller_key: &str,
    ) -> Result<TopicRecord, GenerateSuggestionsError> {
        self.result.clone()
    }
}
