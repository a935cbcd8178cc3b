use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::ReviewCard;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("star rating must be between 1 and 5, got {0}")]
pub struct RatingError(pub u8);

/// A Google-style star rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const FIVE: StarRating = StarRating(5);

    pub fn new(stars: u8) -> Result<Self, RatingError> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(RatingError(stars))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self::FIVE
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// What the writer needs to know about the business and the visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub business_name: String,
    pub category: String,
    pub kind: String,
    pub highlights: Option<String>,
    pub rating: StarRating,
}

impl ReviewRequest {
    pub fn for_card(card: &ReviewCard, rating: StarRating) -> Self {
        Self {
            business_name: card.business_name.clone(),
            category: card.category.clone(),
            kind: card.kind.clone(),
            highlights: None,
            rating,
        }
    }

    pub fn with_highlights(mut self, highlights: impl Into<String>) -> Self {
        let highlights = highlights.into();
        self.highlights = if highlights.trim().is_empty() { None } else { Some(highlights) };
        self
    }
}
