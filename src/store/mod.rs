//! Persistence boundary for the review list.
//!
//! The whole list lives in one key-value slot as a JSON array, newest first.
//! Each schema version has its own slot; nothing moves data between them
//! unless [`migrate_legacy`] is called explicitly.

mod local;
mod memory;

pub use local::LocalStorageStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::review::Review;
use leptos::logging::{log, warn};

/// Storage layouts that have shipped. They share a record shape but not a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    /// Star-button widget, solid avatar colors.
    V1,
    /// Dropdown widget, gradient avatar colors.
    V2,
}

impl SchemaVersion {
    pub fn storage_key(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "review-db",
            SchemaVersion::V2 => "review-db-v2",
        }
    }
}

pub trait ReviewStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Review>>, StoreError>;

    /// Replaces the stored list with `reviews`.
    fn save(&self, reviews: &[Review]) -> Result<(), StoreError>;
}

pub(crate) fn decode(raw: &str) -> Result<Vec<Review>, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Corrupt)
}

pub(crate) fn encode(reviews: &[Review]) -> Result<String, StoreError> {
    serde_json::to_string(reviews).map_err(StoreError::Serialize)
}

/// Loads the stored list, treating a missing, unreadable or corrupt slot as empty.
pub fn load_or_empty(store: &dyn ReviewStore) -> Vec<Review> {
    match store.load() {
        Ok(Some(reviews)) => {
            log!("[STORE] Loaded {} reviews", reviews.len());
            reviews
        }
        Ok(None) => {
            log!("[STORE] No saved reviews, starting fresh");
            Vec::new()
        }
        Err(err) => {
            warn!("[STORE] Ignoring saved reviews: {}", err);
            Vec::new()
        }
    }
}

/// Copies a legacy list into `current` when `current` holds nothing.
/// The legacy slot is left as it is. Returns how many reviews were copied.
pub fn migrate_legacy(
    legacy: &dyn ReviewStore,
    current: &dyn ReviewStore,
) -> Result<usize, StoreError> {
    let current_is_empty = current.load()?.map_or(true, |reviews| reviews.is_empty());
    if !current_is_empty {
        return Ok(0);
    }
    match legacy.load()? {
        Some(reviews) if !reviews.is_empty() => {
            current.save(&reviews)?;
            log!("[STORE] Migrated {} legacy reviews", reviews.len());
            Ok(reviews.len())
        }
        _ => Ok(0),
    }
}
