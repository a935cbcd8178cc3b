pub mod error;
pub mod slug;
pub mod store;
pub mod types;

pub use error::CardError;
pub use slug::{generate_slug, validate_google_maps_url};
pub use store::{CardStore, InMemoryCardStore, JsonFileCardStore};
pub use types::{CardDraft, ReviewCard};
