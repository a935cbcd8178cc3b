use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::llm::{fallback_review, LLMService, ReviewRequest};
use crate::config::AppConfig;
use crate::review::ReviewGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionSource {
    /// Written by the completion server.
    Model,
    /// Fixed per-rating text, used when the model failed.
    StaticFallback,
    /// Assembled by the template generator.
    Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub source: SuggestionSource,
}

/// Picks where a review suggestion for a business page comes from.
///
/// One desk per displayed page: it owns the page's generator, so novelty is
/// tracked per page.
pub struct ReviewDesk<R = StdRng> {
    generator: ReviewGenerator<R>,
    llm: Option<LLMService>,
}

impl ReviewDesk<StdRng> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let corpus = config.load_corpus()?;
        let generator = ReviewGenerator::new(corpus, config.generator.clone())?;
        let llm = if config.llm.enabled {
            let service = LLMService::new(&config.llm)?;
            info!("LLM reviews enabled via {}", service.base_url());
            Some(service)
        } else {
            None
        };
        Ok(Self::new(generator, llm))
    }
}

impl<R: Rng> ReviewDesk<R> {
    pub fn new(generator: ReviewGenerator<R>, llm: Option<LLMService>) -> Self {
        Self { generator, llm }
    }

    /// Model text when a model is configured and answers, otherwise a
    /// fallback. Never fails.
    pub async fn suggest(&mut self, request: &ReviewRequest) -> Suggestion {
        let Some(llm) = &self.llm else {
            return self.regenerate(&request.business_name);
        };

        match llm.generate_review(request).await {
            Ok(text) => Suggestion {
                text,
                source: SuggestionSource::Model,
            },
            Err(e) => {
                warn!("LLM review failed, using static fallback: {:#}", e);
                Suggestion {
                    text: fallback_review(&request.business_name, request.rating),
                    source: SuggestionSource::StaticFallback,
                }
            }
        }
    }

    /// A fresh template review, distinct from the ones this desk already showed.
    pub fn regenerate(&mut self, business_name: &str) -> Suggestion {
        Suggestion {
            text: self.generator.generate(business_name),
            source: SuggestionSource::Template,
        }
    }

    pub fn reset(&mut self) {
        self.generator.reset();
    }

    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    pub fn generator(&self) -> &ReviewGenerator<R> {
        &self.generator
    }
}
