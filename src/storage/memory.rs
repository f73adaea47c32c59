/// In-memory key-value store
///
/// Nothing is written to disk; the data lives as long as the store.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Memory store whose reads can be switched to fail, like a locked database
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    broken: std::cell::Cell<bool>,
}

#[cfg(test)]
impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, broken: bool) {
        self.broken.set(broken);
    }
}

#[cfg(test)]
impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.broken.get() {
            return Err(StorageError::Connection("database is locked".to_string()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}
