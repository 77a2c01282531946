mod content_generator;

pub use content_generator::{ContentGenerator, ContentGeneratorError, SuggestionPrompt};
