/// Public library interface for the Productivity Hub MCP server
///
/// This module exports the hub, its storage backends and the public types
/// that other applications or tests use.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod mcp;
pub mod storage;
pub mod tools;

pub use config::{Args, ConfigError, DatabaseLocation, HubConfig};
pub use dashboard::DashboardSummary;
pub use domain::*;
pub use storage::{KeyValueStore, MemoryStore, Repository, SqliteStore, StorageError};
pub use tools::{ToolError, ToolResponse};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The productivity hub: one repository shared by every tool
///
/// "Today" is the current UTC date unless pinned with [`ProductivityHub::with_today`].
pub struct ProductivityHub<S: KeyValueStore = SqliteStore> {
    repository: Repository<S>,
    pinned_today: Option<NaiveDate>,
}

impl ProductivityHub<SqliteStore> {
    /// Open (or create) the SQLite database at `db_path`
    pub fn new(db_path: PathBuf) -> Result<Self, ServerError> {
        tracing::info!("Initializing Productivity Hub with database: {:?}", db_path);
        let store = SqliteStore::new(&db_path)?;
        Ok(Self::with_store(store))
    }

    /// SQLite database that lives only as long as the process
    pub fn in_memory() -> Result<Self, ServerError> {
        tracing::info!("Initializing Productivity Hub with an in-memory database");
        Ok(Self::with_store(SqliteStore::in_memory()?))
    }

    /// Build the hub described by a resolved configuration
    pub fn from_config(config: &HubConfig) -> Result<Self, ServerError> {
        let hub = match &config.database {
            DatabaseLocation::File(path) => Self::new(path.clone())?,
            DatabaseLocation::InMemory => Self::in_memory()?,
        };
        Ok(match config.today {
            Some(today) => hub.with_today(today),
            None => hub,
        })
    }
}

impl<S: KeyValueStore> ProductivityHub<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            repository: Repository::new(store),
            pinned_today: None,
        }
    }

    /// Pin the current day instead of reading the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(domain::dates::today)
    }

    /// Get a reference to the repository (useful for testing)
    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin is closed or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting MCP server...");

        let summary = DashboardSummary::build(&self.repository, self.today());
        tracing::info!(
            "Server started successfully, found {} habits and {} pending tasks",
            summary.total_habits,
            summary.pending_tasks
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await
    }
}
