mod topic_query;
mod topic_repository;

pub use topic_query::{PageRequest, PageResult, TopicListFilter, TopicQuery, TopicQueryError};
pub use topic_repository::{NewTopicData, TopicRecord, TopicRepository, TopicRepositoryError};
