use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use super::error::CardError;
use super::types::ReviewCard;

/// Storage for review cards. Last write wins.
pub trait CardStore {
    fn list(&self) -> Vec<ReviewCard>;
    fn get(&self, id: Uuid) -> Option<ReviewCard>;
    fn get_by_slug(&self, slug: &str) -> Option<ReviewCard>;
    /// Rejects a card whose id or slug is already stored.
    fn insert(&mut self, card: ReviewCard) -> Result<(), CardError>;
    /// Replaces the stored card with the same id.
    fn update(&mut self, card: ReviewCard) -> Result<(), CardError>;
    fn delete(&mut self, id: Uuid) -> Result<ReviewCard, CardError>;
}

/// In-memory implementation of the card store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCardStore {
    cards: Vec<ReviewCard>,
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardStore for InMemoryCardStore {
    fn list(&self) -> Vec<ReviewCard> {
        self.cards.clone()
    }

    fn get(&self, id: Uuid) -> Option<ReviewCard> {
        self.cards.iter().find(|c| c.id == id).cloned()
    }

    fn get_by_slug(&self, slug: &str) -> Option<ReviewCard> {
        self.cards.iter().find(|c| c.slug == slug).cloned()
    }

    fn insert(&mut self, card: ReviewCard) -> Result<(), CardError> {
        if self.cards.iter().any(|c| c.id == card.id) {
            return Err(CardError::DuplicateId(card.id));
        }
        if self.cards.iter().any(|c| c.slug == card.slug) {
            return Err(CardError::DuplicateSlug(card.slug));
        }
        self.cards.push(card);
        Ok(())
    }

    fn update(&mut self, card: ReviewCard) -> Result<(), CardError> {
        if self.cards.iter().any(|c| c.slug == card.slug && c.id != card.id) {
            return Err(CardError::DuplicateSlug(card.slug));
        }
        let slot = self
            .cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or(CardError::NotFound(card.id))?;
        *slot = card;
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<ReviewCard, CardError> {
        let index = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(CardError::NotFound(id))?;
        Ok(self.cards.remove(index))
    }
}

/// File-based implementation of the card store.
///
/// The whole list is rewritten as pretty JSON after every mutation. A mutation
/// only becomes visible once its write has succeeded.
pub struct JsonFileCardStore {
    path: PathBuf,
    inner: InMemoryCardStore,
}

impl JsonFileCardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            inner: InMemoryCardStore::new(),
        }
    }

    /// Opens the store at `path`, loading existing cards if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CardError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), CardError> {
        self.write(&self.inner.cards)
    }

    fn write(&self, cards: &[ReviewCard]) -> Result<(), CardError> {
        let json = serde_json::to_string_pretty(cards)?;
        fs::write(&self.path, json)?;
        debug!("Saved {} cards to {}", cards.len(), self.path.display());
        Ok(())
    }

    /// Applies `change` to a copy, persists the copy, then swaps it in.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut InMemoryCardStore) -> Result<T, CardError>,
    ) -> Result<T, CardError> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        self.write(&next.cards)?;
        self.inner = next;
        Ok(out)
    }

    /// A missing file is an empty store.
    pub fn load(&mut self) -> Result<(), CardError> {
        if !self.path.exists() {
            return Ok(());
        }
        let content = fs::read_to_string(&self.path)?;
        self.inner.cards = serde_json::from_str(&content)?;
        info!("Loaded {} cards from {}", self.inner.len(), self.path.display());
        Ok(())
    }
}

impl CardStore for JsonFileCardStore {
    fn list(&self) -> Vec<ReviewCard> {
        self.inner.list()
    }

    fn get(&self, id: Uuid) -> Option<ReviewCard> {
        self.inner.get(id)
    }

    fn get_by_slug(&self, slug: &str) -> Option<ReviewCard> {
        self.inner.get_by_slug(slug)
    }

    fn insert(&mut self, card: ReviewCard) -> Result<(), CardError> {
        self.commit(|cards| cards.insert(card))
    }

    fn update(&mut self, card: ReviewCard) -> Result<(), CardError> {
        self.commit(|cards| cards.update(card))
    }

    fn delete(&mut self, id: Uuid) -> Result<ReviewCard, CardError> {
        self.commit(|cards| cards.delete(id))
    }
}
