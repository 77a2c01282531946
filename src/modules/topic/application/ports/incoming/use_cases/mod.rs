mod create_topic_use_case;
mod delete_topic_use_case;
mod get_categories_use_case;
mod get_single_topic_use_case;
mod get_topic_catalog_use_case;
mod get_topics_use_case;
mod topic_command;
mod update_topic_use_case;

pub use create_topic_use_case::{CreateTopicError, CreateTopicUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_categories_use_case::{GetCategoriesError, GetCategoriesUseCase};
pub use get_single_topic_use_case::{GetSingleTopicError, GetSingleTopicUseCase};
pub use get_topic_catalog_use_case::{
    GetTopicCatalogError, GetTopicCatalogUseCase, TopicCatalog, CATALOG_CAP,
};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use topic_command::{CategoryType, TopicCommand, TopicCommandError};
pub use update_topic_use_case::{UpdateTopicError, UpdateTopicUseCase};
