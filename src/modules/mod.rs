pub mod auth;
pub mod suggestion;
pub mod topic;
