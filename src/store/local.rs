use super::{decode, encode, ReviewStore, SchemaVersion};
use crate::error::StoreError;
use crate::models::review::Review;
use leptos::logging::log;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

/// `window.localStorage`, one key per schema version.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    schema: SchemaVersion,
}

impl LocalStorageStore {
    pub fn new(schema: SchemaVersion) -> Self {
        Self { schema }
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl ReviewStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Vec<Review>>, StoreError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(self.schema.storage_key())
            .map_err(|err| StoreError::Read(describe_js_error(&err)))?;
        raw.as_deref().map(decode).transpose()
    }

    fn save(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = encode(reviews)?;
        storage
            .set_item(self.schema.storage_key(), &json)
            .map_err(|err| StoreError::Write(describe_js_error(&err)))?;
        log!("[STORE] Saved {} reviews to {}", reviews.len(), self.schema.storage_key());
        Ok(())
    }
}

// Quota errors arrive as DOMExceptions, which are Error instances in browsers.
fn describe_js_error(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
