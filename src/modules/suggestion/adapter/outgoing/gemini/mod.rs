mod gemini_client;
mod gemini_config;

pub use gemini_client::GeminiClient;
pub use gemini_config::GeminiConfig;
