mod create_topic;
mod delete_topic;
mod get_categories;
mod get_single_topic;
mod get_topics;
mod update_topic;

// Glob re-exports keep the utoipa-generated path items importable
// alongside the handlers and request DTOs.
pub use create_topic::*;
pub use delete_topic::*;
pub use get_categories::*;
pub use get_single_topic::*;
pub use get_topics::*;
pub use update_topic::*;
