/// Database migration management
///
/// This module creates and updates the SQLite schema backing the key-value
/// store.

use rusqlite::{Connection, OptionalExtension};

use crate::storage::StorageError;

/// Current database schema version
///
/// Increment this when you add new migrations
const CURRENT_VERSION: i32 = 1;

/// Initialize the database schema
///
/// Creates the version table and runs any migrations newer than the stored
/// version. Safe to call on every open.
pub fn initialize_database(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let current_version = get_current_version(conn)?;

    if current_version > CURRENT_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema v{} is newer than supported v{}",
            current_version, CURRENT_VERSION
        )));
    }

    if current_version < CURRENT_VERSION {
        run_migrations(conn, current_version)?;
        set_version(conn, CURRENT_VERSION)?;
    }

    Ok(())
}

/// Get the current database schema version (0 for a fresh database)
fn get_current_version(conn: &Connection) -> Result<i32, StorageError> {
    let version = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get::<_, i32>(0)
        })
        .optional()?;

    Ok(version.unwrap_or(0))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), StorageError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run database migrations from the current version to the latest
fn run_migrations(conn: &Connection, from_version: i32) -> Result<(), StorageError> {
    if from_version < 1 {
        migration_v1(conn)?;
    }

    Ok(())
}

/// Migration to version 1: the key-value table
fn migration_v1(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    tracing::info!("Applied migration v1: Created key-value store table");
    Ok(())
}
