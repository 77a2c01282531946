mod generate_suggestions_service;

pub use generate_suggestions_service::GenerateSuggestionsService;
