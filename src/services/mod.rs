pub mod desk;
pub mod llm;

pub use desk::{ReviewDesk, Suggestion, SuggestionSource};
