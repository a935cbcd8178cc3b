use reviewcard::review::{fingerprint, normalize, substitute, Corpus, Draw, Skeleton};

const PLACEHOLDER: &str = "{businessName}";

fn full_draw() -> Draw<'static> {
    Draw {
        opening: "Hi {businessName}.",
        quality: "Good.",
        achievement: "Great.",
        ending: "Bye.",
        connector: Some("Also,"),
        intensifier: Some("truly"),
        timeframe: Some("from day one"),
    }
}

fn bare_draw() -> Draw<'static> {
    Draw {
        connector: None,
        intensifier: None,
        timeframe: None,
        ..full_draw()
    }
}

#[test]
fn test_normalize_whitespace_and_punctuation() {
    assert_eq!(normalize("  Hello   world . Nice ,  day..  "), "Hello world. Nice, day.");
    assert_eq!(normalize("A. . . B"), "A. B");
    assert_eq!(normalize(",, x"), ", x");
    assert_eq!(normalize("tab\tand\nnewline"), "tab and newline");
    assert_eq!(normalize("   "), "");
}

#[test]
fn test_normalize_keeps_clean_text() {
    let clean = "Hi Acme. Truly good. Also, great from day one. Bye.";
    assert_eq!(normalize(clean), clean);
}

#[test]
fn test_substitute_replaces_all() {
    assert_eq!(
        substitute("{businessName} and {businessName}", PLACEHOLDER, "Acme"),
        "Acme and Acme"
    );
    assert_eq!(substitute("No marker here.", PLACEHOLDER, "Acme"), "No marker here.");
}

#[test]
fn test_skeletons_with_every_variation() {
    let draw = full_draw();
    let expected = [
        "Hi {businessName}. Truly good. Also, great from day one. Bye.",
        "Hi {businessName}. Also, truly great. Good from day one. Bye.",
        "Hi {businessName}. Good from day one. Also, truly great. Bye.",
        "Hi {businessName} from day one. Truly good. Also, great. Bye.",
        "Hi {businessName}. Truly great. Also, good from day one. Bye.",
    ];

    for (skeleton, want) in Skeleton::ALL.iter().zip(expected) {
        assert_eq!(skeleton.assemble(&draw, PLACEHOLDER), want, "{:?}", skeleton);
    }
}

#[test]
fn test_skeletons_without_variations() {
    let draw = bare_draw();

    assert_eq!(
        Skeleton::IntensifiedQuality.assemble(&draw, PLACEHOLDER),
        "Hi {businessName}. Good. Great. Bye."
    );
    assert_eq!(
        Skeleton::ConnectedAchievement.assemble(&draw, PLACEHOLDER),
        "Hi {businessName}. Great. Good. Bye."
    );
}

#[test]
fn test_timeframe_keeps_exclamation() {
    let draw = Draw {
        opening: "Outstanding service from {businessName}!",
        timeframe: Some("consistently"),
        ..bare_draw()
    };

    assert_eq!(
        Skeleton::ExtendedOpening.assemble(&draw, PLACEHOLDER),
        "Outstanding service from {businessName} consistently! Good. Great. Bye."
    );
}

#[test]
fn test_casing_kept_for_placeholder_and_acronyms() {
    let draw = Draw {
        opening: "Hi.",
        quality: "{businessName} rocks.",
        achievement: "QR menus work.",
        ending: "Bye.",
        connector: Some("Also,"),
        intensifier: Some("truly"),
        timeframe: None,
    };

    assert_eq!(
        Skeleton::IntensifiedQuality.assemble(&draw, PLACEHOLDER),
        "Hi. Truly {businessName} rocks. Also, QR menus work. Bye."
    );
}

#[test]
fn test_fingerprint_same_text_same_value_in_process() {
    let a = fingerprint("Hi Acme. Good. Great. Bye.");
    let b = fingerprint("Hi Acme. Good. Great. Bye.");
    let c = fingerprint("Hi Acme. Great. Good. Bye.");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_builtin_corpus_is_valid() {
    let corpus = Corpus::builtin();

    assert!(corpus.validate().is_ok());
    assert_eq!(corpus.slot_combinations(), 15 * 15 * 15 * 15);
    assert_eq!(corpus.variations.connectors.len(), 10);
    assert_eq!(corpus.suffixes.len(), 10);
}
