//! Persistence adapter used by the study decks.
//!
//! A `ProgressStore` is an opaque durable key/value store. Writes are
//! synchronous: when `save` returns, the record is stored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::database::Database;
use crate::error::{CoreError, Result};

/// Key/value storage for serialized progress records.
pub trait ProgressStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl ProgressStore for Database {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.kv_get(key).map_err(CoreError::from)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.kv_set(key, value).map_err(CoreError::from)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.kv_delete(key).map_err(CoreError::from)
    }
}

/// In-process store. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Rc<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Storage key scheme, one key per scheduling domain.
pub mod keys {
    /// Both kana types share this record.
    pub const LETTERS: &str = "jlpt-letters-progress-v1";

    pub const SENTENCES_PREFIX: &str = "jlpt-sentences-day-";

    pub fn sentences_day(day: u32) -> String {
        format!("{SENTENCES_PREFIX}{day}-v1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn ProgressStore) {
        assert!(store.load("a").unwrap().is_none());
        store.save("a", "1").unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
        store.remove("a").unwrap();
        assert!(store.load("a").unwrap().is_none());
    }

    #[test]
    fn memory_store_roundtrip() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn database_store_roundtrip() {
        exercise(&Database::open_memory().unwrap());
    }

    #[test]
    fn shared_handles_see_same_records() {
        let store = Rc::new(MemoryStore::new());
        let other = Rc::clone(&store);
        store.save("k", "v").unwrap();
        assert_eq!(other.load("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn key_scheme() {
        assert_eq!(keys::sentences_day(5), "jlpt-sentences-day-5-v1");
        assert_eq!(keys::LETTERS, "jlpt-letters-progress-v1");
    }
}
