mod generate_suggestions;

// Glob re-export keeps the utoipa-generated path item importable alongside
// the handler.
pub use generate_suggestions::*;
