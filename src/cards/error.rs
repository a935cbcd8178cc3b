use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("business name is required")]
    EmptyBusinessName,

    #[error("business name `{0}` produces an empty slug")]
    EmptySlug(String),

    #[error("not a Google Maps review URL: {0}")]
    InvalidMapsUrl(String),

    #[error("card {0} not found")]
    NotFound(Uuid),

    #[error("card {0} already exists")]
    DuplicateId(Uuid),

    #[error("slug `{0}` is already taken")]
    DuplicateSlug(String),

    #[error("card store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("card store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
