pub mod ports;
pub mod services;

mod topic_use_cases;
pub use topic_use_cases::TopicUseCases;
