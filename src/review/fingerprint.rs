use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// 64-bit digest of a finished review.
pub type Fingerprint = u64;

/// Hash of the normalized text. Same text, same fingerprint within this
/// process; values are not meant to be persisted.
pub fn fingerprint(text: &str) -> Fingerprint {
    let mut s = DefaultHasher::new();
    text.hash(&mut s);
    s.finish()
}
