use async_trait::async_trait;

/// Input handed to the external generation service. Built from the topic row;
/// the prompt template itself lives in the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPrompt {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentGeneratorError {
    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    /// Timeouts are reported separately so callers can log them as such.
    #[error("Generation request timed out after {0} ms")]
    Timeout(u64),

    #[error("Generation service returned an unusable response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Returns the raw generated text. Sanitization happens in the caller.
    async fn generate(&self, prompt: SuggestionPrompt) -> Result<String, ContentGeneratorError>;
}
