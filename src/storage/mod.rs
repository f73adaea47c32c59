/// Storage layer for persisting record collections
///
/// Each module's records live as one JSON array under one key, the same way a
/// browser's local storage would hold them. `KeyValueStore` is the raw
/// key-value backend; `Repository` adds typed, whole-collection load and save
/// on top of it.

pub mod sqlite;
pub mod memory;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;
pub use memory::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::domain::CollectionKey;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Raw string key-value backend
///
/// This trait allows swapping SQLite for an in-memory map (tests, throwaway
/// sessions) while keeping the same interface.
pub trait KeyValueStore {
    /// Get the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed access to the persisted collections
///
/// Owned by whatever serves the user; every mutation is load, change, save.
pub struct Repository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the collection under `key` for display
    ///
    /// Fails soft: a missing key, a backend error or unreadable JSON all yield
    /// an empty collection. Only the last two are logged.
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Vec<T> {
        match self.load_for_update(key) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to read '{}', using empty collection: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Load the collection under `key` before saving it back
    ///
    /// A backend read error is returned, never an empty collection, so a
    /// failed read cannot overwrite the stored records. A missing key or
    /// unreadable JSON still yields an empty collection.
    pub fn load_for_update<T: DeserializeOwned>(&self, key: CollectionKey) -> Result<Vec<T>, StorageError> {
        let raw = match self.store.get_item(key.as_str())? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!("Stored '{}' is not valid, using empty collection: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Persist the whole collection under `key`, replacing what was there
    pub fn save<T: Serialize>(&self, key: CollectionKey, records: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records)?;
        self.store.set_item(key.as_str(), &raw)?;

        tracing::debug!("Saved {} record(s) under '{}'", records.len(), key);
        Ok(())
    }

    /// Drop the collection under `key` entirely
    pub fn clear(&self, key: CollectionKey) -> Result<(), StorageError> {
        self.store.remove_item(key.as_str())
    }

    /// Get a reference to the underlying store (useful for testing)
    pub fn store(&self) -> &S {
        &self.store
    }
}
