use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::gemini_config::GeminiConfig;
use crate::suggestion::application::ports::outgoing::{
    ContentGenerator, ContentGeneratorError, SuggestionPrompt,
};

/// Fixed creativity setting; only the token ceiling is configurable.
const TEMPERATURE: f32 = 0.7;

//
// ──────────────────────────────────────────────────────────
// Wire DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// reqwest errors print the full request URL, and the query string
    /// carries the API key. Only the error class leaves this function.
    fn describe_send_error(&self, err: reqwest::Error) -> ContentGeneratorError {
        if err.is_timeout() {
            error!(timeout_ms = self.config.timeout_ms, "Gemini request timed out");
            return ContentGeneratorError::Timeout(self.config.timeout_ms);
        }

        let kind = if err.is_connect() {
            "connection failed"
        } else if err.is_request() {
            "request could not be sent"
        } else if err.is_body() || err.is_decode() {
            "response body unreadable"
        } else {
            "transport error"
        };
        error!(error_kind = kind, "Gemini request failed");
        ContentGeneratorError::RequestFailed(format!("Gemini {kind}"))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: SuggestionPrompt) -> Result<String, ContentGeneratorError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: build_prompt(&prompt),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .send()
            .await
            .map_err(|e| self.describe_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, body = %detail, "Gemini returned an error response");
            return Err(ContentGeneratorError::RequestFailed(format!(
                "Gemini returned HTTP {status}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|_| {
            ContentGeneratorError::MalformedResponse("invalid JSON body".to_string())
        })?;

        extract_text(payload)
    }
}

//
// ──────────────────────────────────────────────────────────
// Helper Functions
// ──────────────────────────────────────────────────────────
//

/// Concatenates the text parts of the first candidate. Anything else in the
/// response counts as unusable.
fn extract_text(payload: GenerateContentResponse) -> Result<String, ContentGeneratorError> {
    let parts = payload
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    let text: String = parts.into_iter().map(|p| p.text).collect();
    if text.trim().is_empty() {
        return Err(ContentGeneratorError::MalformedResponse(
            "no candidate text in response".to_string(),
        ));
    }

    Ok(text)
}

/// The HTML template the sanitizer downstream relies on: warning elements
/// for truncation and a closing sentinel that marks a complete response.
fn build_prompt(prompt: &SuggestionPrompt) -> String {
    let topic = &prompt.title;
    let context = &prompt.description;
    format!(
        r#"Generate blog content suggestions for:
Topic: {topic}
Context: {context}

Please format your response exactly like this HTML template, maintaining all classes and structure:

<div class="suggestions">
  <h3>Key Points to Cover</h3>
  <ul class="detailed-list">
    <li><strong>Introduction to {topic}:</strong> Provide a concise and engaging overview of what "{topic}" encompasses. Define its key characteristics and significance.</li>
    <li><strong>Exploring the Core Concepts:</strong> Break down the fundamental concepts related to {topic}. Explain them in clear, accessible language, using examples and analogies where appropriate.</li>
    <li><strong>Practical Applications and Benefits:</strong> Discuss the practical applications of {topic} and how it can be utilized in different scenarios. Highlight the potential benefits and advantages it offers.</li>
  </ul>
</div>

IMPORTANT FORMATTING RULES:
1. Use <strong> tags for titles/headers within bullet points, followed by a colon (:)
2. Always structure items in semantic lists (<ul> and <li>)
3. If response must be truncated due to token limits, add a warning div
4. Keep HTML structure clean and consistent
5. Do not add any CSS styles - the styling is handled by the frontend
6. Make sure each bullet point has a meaningful bolded title followed by detailed content

Example format:
<div class="suggestions">
  <ul class="detailed-list">
    <li><strong>Introduction to the Topic:</strong> Provide a concise and engaging overview of what the topic encompasses. Define its key characteristics and significance.</li>
    <li><strong>Key Strategies for Implementation:</strong> Outline effective approaches to implement the concepts discussed in the topic. Include practical steps and considerations.</li>
  </ul>
</div>

Always end your response with "<!--END-->" to detect truncation."#
    )
}
