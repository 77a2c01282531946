mod json_config;
mod query_config;
mod response;

pub use json_config::custom_json_config;
pub use query_config::custom_query_config;
pub use response::{ApiError, ApiResponse, RateLimitBody};
