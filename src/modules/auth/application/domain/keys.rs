use std::env;

/// Static client credentials every `/api` route requires: a shared API key
/// and a CORS token handed to the embedding widget.
#[derive(Debug, Clone)]
pub struct AuthKeys {
    api_key: String,
    cors_token: String,
}

impl AuthKeys {
    /// Values are trimmed so a stray newline in an env file cannot lock
    /// every client out.
    pub fn new(api_key: &str, cors_token: &str) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            cors_token: cors_token.trim().to_string(),
        }
    }

    /// Load credentials from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let api_key = env::var("AUTH_API_KEY").expect("AUTH_API_KEY must be set");
        let cors_token = env::var("CORS_TOKEN").expect("CORS_TOKEN must be set");

        let keys = Self::new(&api_key, &cors_token);

        if keys.api_key.is_empty() || keys.cors_token.is_empty() {
            panic!("AUTH_API_KEY and CORS_TOKEN must be non-empty");
        }

        keys
    }

    pub fn api_key_matches(&self, candidate: &str) -> bool {
        !candidate.is_empty() && candidate == self.api_key
    }

    pub fn cors_token_matches(&self, candidate: &str) -> bool {
        !candidate.is_empty() && candidate == self.cors_token
    }
}
