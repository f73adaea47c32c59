/// SQLite implementation of the key-value store
///
/// All collections share a single `kv_store` table keyed by collection name.
/// The value column holds the collection's JSON text.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::{migrations, KeyValueStore, StorageError};

/// SQLite-based storage implementation
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and bring its schema up to date
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);
        Ok(Self { conn })
    }

    /// A private database that disappears with the store
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!("Wrote key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        tracing::debug!("Removed key '{}'", key);
        Ok(())
    }
}
