use thiserror::Error;

use super::corpus::Category;

/// Configuration errors rejected when a generator is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    #[error("corpus category `{0}` is empty")]
    EmptyCategory(Category),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("retry budget must be at least 1")]
    ZeroRetryBudget,

    #[error("business name placeholder must not be empty")]
    EmptyPlaceholder,
}
