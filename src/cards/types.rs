use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CardError;
use super::slug::{generate_slug, validate_google_maps_url};

/// A business that owns a public review page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCard {
    pub id: Uuid,
    pub business_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub logo_url: String,
    pub google_maps_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form input for creating or editing a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    pub business_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub logo_url: String,
    pub google_maps_url: String,
}

impl CardDraft {
    pub fn new(business_name: impl Into<String>, google_maps_url: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            google_maps_url: google_maps_url.into(),
            ..Self::default()
        }
    }

    /// Trimmed name, trimmed URL and derived slug, or the first validation error.
    fn checked(&self) -> Result<(String, String, String), CardError> {
        let name = self.business_name.trim();
        if name.is_empty() {
            return Err(CardError::EmptyBusinessName);
        }
        let url = self.google_maps_url.trim();
        if !validate_google_maps_url(url) {
            return Err(CardError::InvalidMapsUrl(url.to_string()));
        }
        let slug = generate_slug(name);
        if slug.is_empty() {
            return Err(CardError::EmptySlug(name.to_string()));
        }
        Ok((name.to_string(), url.to_string(), slug))
    }
}

impl ReviewCard {
    pub fn create(draft: CardDraft) -> Result<Self, CardError> {
        let (business_name, google_maps_url, slug) = draft.checked()?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            business_name,
            category: draft.category,
            kind: draft.kind,
            description: non_blank(draft.description),
            location: non_blank(draft.location),
            slug,
            logo_url: draft.logo_url,
            google_maps_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the editable fields. `id` and `created_at` are kept.
    pub fn apply(&mut self, draft: CardDraft) -> Result<(), CardError> {
        let (business_name, google_maps_url, slug) = draft.checked()?;
        self.business_name = business_name;
        self.category = draft.category;
        self.kind = draft.kind;
        self.description = non_blank(draft.description);
        self.location = non_blank(draft.location);
        self.slug = slug;
        self.logo_url = draft.logo_url;
        self.google_maps_url = google_maps_url;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Path of the public review page.
    pub fn review_path(&self) -> String {
        format!("/{}", self.slug)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
