//! Template-based review text generation with per-instance de-duplication.

pub mod corpus;
pub mod error;
pub mod fingerprint;
pub mod generator;
pub mod normalize;
pub mod skeleton;

pub use corpus::{Category, Corpus, Templates, Variations};
pub use error::ReviewError;
pub use fingerprint::{fingerprint, Fingerprint};
pub use generator::ReviewGenerator;
pub use normalize::{normalize, substitute};
pub use skeleton::{Draw, Skeleton};
