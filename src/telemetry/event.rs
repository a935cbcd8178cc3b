use serde::{Deserialize, Serialize};

// Allowed: Counts, Flags
// Forbidden: Review text, Business names, Fingerprints

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationEvent {
    Generated {
        /// Composition attempts, including the successful one.
        attempts: u32,
        /// The closing-suffix fallback was applied.
        used_suffix: bool,
        /// The returned text was new to the generator.
        novel: bool,
    },

    Reset {
        cleared: usize,
    },
}
