use crate::suggestion::application::ports::incoming::use_cases::GenerateSuggestionsUseCase;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetCategoriesUseCase, GetSingleTopicUseCase,
    GetTopicCatalogUseCase, GetTopicsUseCase, UpdateTopicUseCase,
};
use crate::topic::application::TopicUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    topic: Option<TopicUseCases>,
    generate_suggestions: Option<Arc<dyn GenerateSuggestionsUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: Some(TopicUseCases {
                create: Arc::new(StubCreateTopicUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetTopicsUseCase::empty()),
                get_catalog: Arc::new(StubGetTopicCatalogUseCase::failure(
                    "not used in this test",
                )),
                get_single: Arc::new(StubGetSingleTopicUseCase::not_found()),
                update: Arc::new(StubUpdateTopicUseCase::not_found()),
                delete: Arc::new(StubDeleteTopicUseCase::missing()),
                get_categories: Arc::new(StubGetCategoriesUseCase::success(vec![])),
            }),
            generate_suggestions: Some(Arc::new(StubGenerateSuggestionsUseCase::not_found())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_catalog(mut self, uc: impl GetTopicCatalogUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.get_catalog = Arc::new(uc);
        self
    }

    pub fn with_get_single_topic(mut self, uc: impl GetSingleTopicUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_topic(mut self, uc: impl UpdateTopicUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(mut self, uc: impl DeleteTopicUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.delete = Arc::new(uc);
        self
    }

    pub fn with_get_categories(mut self, uc: impl GetCategoriesUseCase + 'static) -> Self {
        let topic = self
            .topic
            .as_mut()
            .expect("Topic use cases must be initialized");

        topic.get_categories = Arc::new(uc);
        self
    }

    pub fn with_generate_suggestions(
        mut self,
        uc: impl GenerateSuggestionsUseCase + 'static,
    ) -> Self {
        self.generate_suggestions = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: self.topic.unwrap(),
            generate_suggestions_use_case: self.generate_suggestions.unwrap(),
        })
    }
}
