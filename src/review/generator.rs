use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::corpus::Corpus;
use super::error::ReviewError;
use super::fingerprint::{fingerprint, Fingerprint};
use super::normalize::{normalize, substitute};
use super::skeleton::{Draw, Skeleton};
use crate::config::GeneratorConfig;
use crate::telemetry::{GenerationEvent, GenerationStats, TelemetryRecorder};

/// Writes review sentences for a business and remembers what it has written.
///
/// The seen-set is instance data. Two generators never block each other's
/// output, and `&mut self` on `generate`/`reset` keeps a single owner.
pub struct ReviewGenerator<R = StdRng> {
    corpus: Corpus,
    config: GeneratorConfig,
    rng: R,
    seen: HashSet<Fingerprint>,
    telemetry: TelemetryRecorder,
}

impl ReviewGenerator<StdRng> {
    /// Entropy-seeded generator.
    pub fn new(corpus: Corpus, config: GeneratorConfig) -> Result<Self, ReviewError> {
        Self::with_rng(corpus, config, StdRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed.
    pub fn seeded(corpus: Corpus, config: GeneratorConfig, seed: u64) -> Result<Self, ReviewError> {
        Self::with_rng(corpus, config, StdRng::seed_from_u64(seed))
    }
}

impl Default for ReviewGenerator<StdRng> {
    /// Built-in corpus, default tunables.
    fn default() -> Self {
        Self::from_validated(Corpus::builtin(), GeneratorConfig::default(), StdRng::from_entropy())
    }
}

impl<R: Rng> ReviewGenerator<R> {
    /// Rejects empty corpus categories and out-of-range tunables up front.
    pub fn with_rng(corpus: Corpus, config: GeneratorConfig, rng: R) -> Result<Self, ReviewError> {
        corpus.validate()?;
        config.validate()?;
        Ok(Self::from_validated(corpus, config, rng))
    }

    fn from_validated(corpus: Corpus, config: GeneratorConfig, rng: R) -> Self {
        Self {
            corpus,
            config,
            rng,
            seen: HashSet::new(),
            telemetry: TelemetryRecorder::new(),
        }
    }

    /// Produces a review for `business_name` that this generator has not
    /// returned since the last reset, within the retry budget.
    ///
    /// Once the budget is spent a closing suffix is appended and the result is
    /// accepted even if it still collides.
    pub fn generate(&mut self, business_name: &str) -> String {
        let mut attempts = 0;
        let (mut review, mut print) = loop {
            attempts += 1;
            let review = self.compose(business_name);
            let print = fingerprint(&review);
            if !self.seen.contains(&print) || attempts >= self.config.retry_budget {
                break (review, print);
            }
        };

        let mut used_suffix = false;
        if self.seen.contains(&print) {
            let suffix = pick(&mut self.rng, &self.corpus.suffixes);
            review = normalize(&format!("{} {}", review, suffix));
            print = fingerprint(&review);
            used_suffix = true;
            debug!("Retry budget of {} spent, appended closing suffix", attempts);
        }

        let novel = self.seen.insert(print);
        if !novel {
            debug!("Accepting repeated review after {} attempts", attempts);
        }

        self.telemetry.record(GenerationEvent::Generated { attempts, used_suffix, novel });
        review
    }

    /// Forgets every review produced so far.
    pub fn reset(&mut self) {
        let cleared = self.seen.len();
        self.seen.clear();
        self.telemetry.record(GenerationEvent::Reset { cleared });
        debug!("Review memory reset, {} fingerprints cleared", cleared);
    }

    /// Number of distinct reviews remembered.
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    pub fn has_produced(&self, review: &str) -> bool {
        self.seen.contains(&fingerprint(review))
    }

    pub fn stats(&self) -> GenerationStats {
        self.telemetry.stats()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// One attempt: draw, assemble, substitute, normalize.
    fn compose(&mut self, business_name: &str) -> String {
        let templates = &self.corpus.templates;
        let variations = &self.corpus.variations;
        let rng = &mut self.rng;

        let opening = pick(rng, &templates.openings);
        let quality = pick(rng, &templates.qualities);
        let achievement = pick(rng, &templates.achievements);
        let ending = pick(rng, &templates.endings);

        let use_connector = rng.gen_bool(self.config.connector_probability);
        let use_intensifier = rng.gen_bool(self.config.intensifier_probability);
        let use_timeframe = rng.gen_bool(self.config.timeframe_probability);

        let draw = Draw {
            opening,
            quality,
            achievement,
            ending,
            connector: use_connector.then(|| pick(rng, &variations.connectors)),
            intensifier: use_intensifier.then(|| pick(rng, &variations.intensifiers)),
            timeframe: use_timeframe.then(|| pick(rng, &variations.timeframes)),
        };

        let skeleton = Skeleton::ALL[rng.gen_range(0..Skeleton::ALL.len())];
        let placeholder = self.config.placeholder.as_str();
        let assembled = skeleton.assemble(&draw, placeholder);
        normalize(&substitute(&assembled, placeholder, business_name))
    }
}

/// Uniform pick. Callers guarantee `items` is non-empty.
fn pick<'a, R: Rng>(rng: &mut R, items: &'a [String]) -> &'a str {
    &items[rng.gen_range(0..items.len())]
}
