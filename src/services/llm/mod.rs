pub mod client;
pub mod prompt;
pub mod types;

pub use client::LLMService;
pub use prompt::{build_review_prompt, fallback_review, sentiment_guide};
pub use types::{RatingError, ReviewRequest, StarRating};
