use super::{decode, encode, ReviewStore, SchemaVersion};
use crate::error::StoreError;
use crate::models::review::Review;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-process stand-in for browser storage. Clones and `for_schema` views
/// share the same slots, the way every tab of a site shares localStorage.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<&'static str, String>>>,
    fail_writes: Rc<Cell<bool>>,
    schema: SchemaVersion,
}

impl MemoryStore {
    pub fn new(schema: SchemaVersion) -> Self {
        Self {
            slots: Rc::default(),
            fail_writes: Rc::default(),
            schema,
        }
    }

    /// Same backing slots, different key.
    pub fn for_schema(&self, schema: SchemaVersion) -> Self {
        Self {
            schema,
            ..self.clone()
        }
    }

    /// Raw slot contents, exactly as a browser would hold them.
    pub fn raw(&self) -> Option<String> {
        self.slots.borrow().get(self.schema.storage_key()).cloned()
    }

    pub fn put_raw(&self, raw: impl Into<String>) {
        self.slots
            .borrow_mut()
            .insert(self.schema.storage_key(), raw.into());
    }

    /// Makes every following `save` fail as if the quota were exhausted.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl ReviewStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Review>>, StoreError> {
        self.raw().as_deref().map(decode).transpose()
    }

    fn save(&self, reviews: &[Review]) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Write("quota exceeded".into()));
        }
        let json = encode(reviews)?;
        self.put_raw(json);
        Ok(())
    }
}
