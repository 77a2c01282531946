use async_trait::async_trait;

use crate::suggestion::application::domain::{
    has_template_markup, sanitize_html, sanitize_plain, Clock, FixedWindowRateLimiter,
    RateLimitDecision, SystemClock,
};
use crate::suggestion::application::ports::incoming::use_cases::{
    GenerateSuggestionsError, GenerateSuggestionsUseCase,
};
use crate::suggestion::application::ports::outgoing::{ContentGenerator, SuggestionPrompt};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicRecord, TopicRepository};

/// Drives one suggestion request end to end: rate gate, topic lookup,
/// generation, sanitization, persistence. The gate runs first, so an
/// over-budget call is rejected even when the topic does not exist.
pub struct GenerateSuggestionsService<Q, R, G, C = SystemClock>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    G: ContentGenerator + Send + Sync,
    C: Clock,
{
    query: Q,
    repository: R,
    generator: G,
    limiter: FixedWindowRateLimiter<C>,
}

impl<Q, R, G, C> GenerateSuggestionsService<Q, R, G, C>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    G: ContentGenerator + Send + Sync,
    C: Clock,
{
    pub fn new(query: Q, repository: R, generator: G, limiter: FixedWindowRateLimiter<C>) -> Self {
        Self {
            query,
            repository,
            generator,
            limiter,
        }
    }
}

#[async_trait]
impl<Q, R, G, C> GenerateSuggestionsUseCase for GenerateSuggestionsService<Q, R, G, C>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    G: ContentGenerator + Send + Sync,
    C: Clock,
{
    async fn execute(
        &self,
        topic_id: i32,
        caller_key: &str,
    ) -> Result<TopicRecord, GenerateSuggestionsError> {
        if let RateLimitDecision::Limited { retry_after_secs } = self.limiter.check(caller_key) {
            return Err(GenerateSuggestionsError::RateLimited { retry_after_secs });
        }

        let topic = self
            .query
            .get_by_id(topic_id)
            .await
            .map_err(|e| GenerateSuggestionsError::LookupFailed(e.to_string()))?
            .ok_or(GenerateSuggestionsError::TopicNotFound)?;

        let prompt = SuggestionPrompt {
            title: topic.title,
            description: topic.description,
        };
        let raw = self
            .generator
            .generate(prompt)
            .await
            .map_err(|e| GenerateSuggestionsError::GenerationFailed(e.to_string()))?;

        let suggestions = if has_template_markup(&raw) {
            sanitize_html(&raw)
        } else {
            sanitize_plain(&raw)
        };

        // Prior suggestions stay in place unless this write succeeds.
        self.repository
            .save_suggestions(topic_id, suggestions)
            .await
            .map_err(|e| GenerateSuggestionsError::PersistFailed(e.to_string()))
    }
}
