use std::env;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub timeout_ms: u64,
}

impl GeminiConfig {
    /// Helper function to parse numeric limits
    fn parse_limit(key: &str, default: &str) -> u64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load Gemini configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        // Overridable so tests and local stubs can point the client at a
        // fake endpoint.
        let base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let max_output_tokens = Self::parse_limit("GEMINI_TOKEN_LIMIT", "400") as u32;
        let timeout_ms = Self::parse_limit("GEMINI_TIMEOUT_MS", "30000");

        if max_output_tokens == 0 {
            panic!("GEMINI_TOKEN_LIMIT must be greater than 0");
        }
        if timeout_ms == 0 {
            panic!("GEMINI_TIMEOUT_MS must be greater than 0");
        }

        Self {
            api_key,
            model,
            base_url,
            max_output_tokens,
            timeout_ms,
        }
    }
}
