use std::collections::HashSet;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reviewcard::config::GeneratorConfig;
use reviewcard::review::{Category, Corpus, ReviewError, ReviewGenerator, Templates, Variations};

fn minimal_corpus() -> Corpus {
    Corpus {
        templates: Templates {
            openings: vec!["Hi {businessName}.".into()],
            qualities: vec!["Good.".into()],
            achievements: vec!["Great.".into()],
            endings: vec!["Bye.".into()],
        },
        variations: Variations {
            connectors: vec!["Also,".into()],
            intensifiers: vec!["truly".into()],
            timeframes: vec!["from day one".into()],
        },
        suffixes: vec!["Thanks!".into()],
    }
}

// Always draws index 0 and passes every non-zero coin flip.
fn zero_rng() -> StepRng {
    StepRng::new(0, 0)
}

fn plain_generator() -> ReviewGenerator<StepRng> {
    ReviewGenerator::with_rng(
        minimal_corpus(),
        GeneratorConfig::default().without_variations(),
        zero_rng(),
    )
    .unwrap()
}

#[test]
fn test_minimal_corpus_first_call() {
    let mut generator = plain_generator();

    let review = generator.generate("Acme");

    assert_eq!(review, "Hi Acme. Good. Great. Bye.");
    assert_eq!(generator.seen_len(), 1, "One fingerprint per successful call");
    assert!(generator.has_produced(&review));
}

#[test]
fn test_minimal_corpus_forces_suffix_fallback() {
    let mut generator = plain_generator();

    let first = generator.generate("Acme");
    let second = generator.generate("Acme");

    assert_eq!(second, "Hi Acme. Good. Great. Bye. Thanks!");
    assert_ne!(first, second);
    assert_eq!(generator.seen_len(), 2);

    let stats = generator.stats();
    assert_eq!(stats.suffix_fallbacks, 1);
    assert_eq!(stats.max_attempts, 100, "Fallback only after the full retry budget");
}

#[test]
fn test_exhausted_fallback_still_returns_text() {
    let mut generator = plain_generator();

    generator.generate("Acme");
    generator.generate("Acme");
    let third = generator.generate("Acme");

    // Nothing novel is left: the suffixed text repeats and is accepted anyway.
    assert_eq!(third, "Hi Acme. Good. Great. Bye. Thanks!");
    assert_eq!(generator.seen_len(), 2, "A repeat adds no fingerprint");
    assert_eq!(generator.stats().duplicates_accepted, 1);
}

#[test]
fn test_all_variations_included() {
    let mut generator =
        ReviewGenerator::with_rng(minimal_corpus(), GeneratorConfig::default(), zero_rng()).unwrap();

    let review = generator.generate("Acme");

    assert_eq!(review, "Hi Acme. Truly good. Also, great from day one. Bye.");
}

#[test]
fn test_default_probabilities_mix_variations() {
    let mut generator = ReviewGenerator::with_rng(
        minimal_corpus(),
        GeneratorConfig::default(),
        StdRng::seed_from_u64(42),
    )
    .unwrap();

    let mut with_connector = 0;
    let mut with_intensifier = 0;
    let mut with_timeframe = 0;
    let calls = 200;
    for _ in 0..calls {
        generator.reset();
        let review = generator.generate("Acme");
        if review.contains("Also,") {
            with_connector += 1;
        }
        if review.to_lowercase().contains("truly") {
            with_intensifier += 1;
        }
        if review.contains("from day one") {
            with_timeframe += 1;
        }
    }

    for (name, count) in [
        ("connector", with_connector),
        ("intensifier", with_intensifier),
        ("timeframe", with_timeframe),
    ] {
        assert!(count > 0, "No review included a {}", name);
        assert!(count < calls, "Every review included a {}", name);
    }
}

#[test]
fn test_custom_retry_budget() {
    let config = GeneratorConfig {
        retry_budget: 3,
        ..GeneratorConfig::default().without_variations()
    };
    let mut generator = ReviewGenerator::with_rng(minimal_corpus(), config, zero_rng()).unwrap();

    generator.generate("Acme");
    generator.generate("Acme");

    assert_eq!(generator.stats().max_attempts, 3);
}

#[test]
fn test_novelty_with_builtin_corpus() {
    let mut generator =
        ReviewGenerator::seeded(Corpus::builtin(), GeneratorConfig::default(), 7).unwrap();

    let reviews: Vec<String> = (0..100).map(|_| generator.generate("Acme Dental")).collect();
    let distinct: HashSet<&String> = reviews.iter().collect();

    assert_eq!(distinct.len(), 100, "100 calls must give 100 distinct reviews");
    assert_eq!(generator.seen_len(), 100);
    assert_eq!(generator.stats().suffix_fallbacks, 0);
}

#[test]
fn test_business_name_is_substituted() {
    let mut generator =
        ReviewGenerator::seeded(Corpus::builtin(), GeneratorConfig::default(), 11).unwrap();

    for _ in 0..200 {
        let review = generator.generate("Blue Fin Sushi");
        assert!(!review.is_empty());
        assert!(!review.contains("{businessName}"), "Unsubstituted placeholder in: {}", review);
    }
}

#[test]
fn test_every_placeholder_occurrence_replaced() {
    let mut corpus = minimal_corpus();
    corpus.templates.openings = vec!["{businessName} loves {businessName}.".into()];
    let mut generator = ReviewGenerator::with_rng(
        corpus,
        GeneratorConfig::default().without_variations(),
        zero_rng(),
    )
    .unwrap();

    let review = generator.generate("Acme");

    assert_eq!(review, "Acme loves Acme. Good. Great. Bye.");
    assert_eq!(review.matches("Acme").count(), 2);
}

#[test]
fn test_custom_placeholder() {
    let mut corpus = minimal_corpus();
    corpus.templates.openings = vec!["Hello <name>!".into()];
    let config = GeneratorConfig {
        placeholder: "<name>".into(),
        ..GeneratorConfig::default().without_variations()
    };
    let mut generator = ReviewGenerator::with_rng(corpus, config, zero_rng()).unwrap();

    assert_eq!(generator.generate("Acme"), "Hello Acme! Good. Great. Bye.");
}

#[test]
fn test_output_is_normalized() {
    let mut generator =
        ReviewGenerator::seeded(Corpus::builtin(), GeneratorConfig::default(), 3).unwrap();

    for _ in 0..300 {
        let review = generator.generate("Acme");
        assert!(!review.contains(".."), "Doubled period in: {}", review);
        assert!(!review.contains(",,"), "Doubled comma in: {}", review);
        assert!(!review.contains("  "), "Doubled space in: {}", review);
        assert!(!review.contains(" ."), "Space before period in: {}", review);
        assert!(!review.contains(" ,"), "Space before comma in: {}", review);
        assert_eq!(review.trim(), review);
    }
}

#[test]
fn test_reset_on_empty_generator_is_noop() {
    let mut generator = plain_generator();

    generator.reset();
    generator.reset();

    assert_eq!(generator.seen_len(), 0);
}

#[test]
fn test_reset_readmits_previous_text() {
    let mut generator = plain_generator();

    let before = generator.generate("Acme");
    generator.reset();
    let after = generator.generate("Acme");

    assert_eq!(before, after, "No memory survives a reset");
    assert_eq!(generator.seen_len(), 1);
    assert_eq!(generator.stats().suffix_fallbacks, 0);
}

#[test]
fn test_instances_do_not_share_memory() {
    let mut a = plain_generator();
    let mut b = plain_generator();

    let from_a = a.generate("Acme");
    let from_b = b.generate("Acme");

    assert_eq!(from_a, from_b, "A fresh instance is not blocked by another's output");
    assert!(!b.has_produced("Hi Acme. Good. Great. Bye. Thanks!"));
}

#[test]
fn test_latency_is_bounded_by_retry_budget() {
    let mut generator = plain_generator();

    for _ in 0..500 {
        generator.generate("Acme");
    }

    let stats = generator.stats();
    assert_eq!(stats.generated, 500);
    assert!(stats.max_attempts <= 100);
    assert_eq!(generator.seen_len(), 2);
}

#[test]
fn test_empty_category_rejected() {
    let mut corpus = minimal_corpus();
    corpus.templates.qualities.clear();

    let result = ReviewGenerator::with_rng(corpus, GeneratorConfig::default(), zero_rng());

    assert_eq!(result.err(), Some(ReviewError::EmptyCategory(Category::Quality)));
}

#[test]
fn test_empty_variation_category_rejected() {
    let mut corpus = minimal_corpus();
    corpus.variations.timeframes.clear();

    let result = ReviewGenerator::with_rng(corpus, GeneratorConfig::default(), zero_rng());

    assert_eq!(result.err(), Some(ReviewError::EmptyCategory(Category::Timeframe)));
}

#[test]
fn test_invalid_tunables_rejected() {
    let bad_probability = GeneratorConfig {
        connector_probability: 1.5,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        ReviewGenerator::with_rng(minimal_corpus(), bad_probability, zero_rng()).err(),
        Some(ReviewError::InvalidProbability {
            name: "connector_probability",
            value: 1.5
        })
    );

    let zero_budget = GeneratorConfig {
        retry_budget: 0,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        ReviewGenerator::with_rng(minimal_corpus(), zero_budget, zero_rng()).err(),
        Some(ReviewError::ZeroRetryBudget)
    );

    let no_placeholder = GeneratorConfig {
        placeholder: String::new(),
        ..GeneratorConfig::default()
    };
    assert_eq!(
        ReviewGenerator::with_rng(minimal_corpus(), no_placeholder, zero_rng()).err(),
        Some(ReviewError::EmptyPlaceholder)
    );
}

#[test]
fn test_default_generator_uses_builtin_corpus() {
    let mut generator: ReviewGenerator = ReviewGenerator::default();

    let review = generator.generate("Acme");

    assert!(!review.is_empty());
    assert_eq!(generator.corpus(), &Corpus::builtin());
    assert_eq!(generator.config(), &GeneratorConfig::default());
}
