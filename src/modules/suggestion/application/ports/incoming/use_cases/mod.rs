mod generate_suggestions_use_case;

pub use generate_suggestions_use_case::{GenerateSuggestionsError, GenerateSuggestionsUseCase};
