/// Command line configuration
///
/// `Args` is what clap parses; `HubConfig` is the resolved form the binary
/// acts on (database location, pinned day, log level).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use thiserror::Error;

use crate::domain::dates::parse_day;
use crate::domain::DomainError;

/// Directory name used under the fallback locations
const APP_DIR: &str = "productivity_hub";
const DATABASE_FILE: &str = "productivity.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid --today value: {0}")]
    InvalidToday(#[from] DomainError),

    #[error("Cannot prepare database directory {path}: {source}")]
    DatabaseDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Command line arguments for the Productivity Hub MCP server
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, conflicts_with = "in_memory")]
    pub database: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long)]
    pub in_memory: bool,

    /// Treat this day (YYYY-MM-DD) as today instead of the current UTC date
    #[arg(long)]
    pub today: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub database: DatabaseLocation,
    pub today: Option<NaiveDate>,
    pub log_level: &'static str,
}

impl HubConfig {
    /// Resolve parsed arguments, creating the database directory if needed
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let today = args.today.as_deref().map(parse_day).transpose()?;

        let database = if args.in_memory {
            DatabaseLocation::InMemory
        } else {
            match args.database {
                Some(path) => {
                    ensure_parent(&path)?;
                    DatabaseLocation::File(path)
                }
                None => DatabaseLocation::File(default_database_path()?),
            }
        };

        Ok(Self {
            database,
            today,
            log_level: log_level(args.debug, args.verbose),
        })
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`
    pub fn env_filter(&self) -> String {
        format!("productivity_hub_mcp={}", self.log_level)
    }
}

fn log_level(debug: bool, verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else if debug {
        "info"
    } else {
        "warn"
    }
}

fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::DatabaseDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Default database path: the first writable of home, data dir, config dir,
/// working directory, then the temp dir
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let candidates = [
        dirs::home_dir().map(|p| p.join(format!(".{}", APP_DIR))),
        dirs::data_dir().map(|p| p.join(APP_DIR)),
        dirs::config_dir().map(|p| p.join(APP_DIR)),
        std::env::current_dir().ok().map(|p| p.join(format!(".{}", APP_DIR))),
    ];

    for dir in candidates.iter().flatten() {
        if is_writable_dir(dir) {
            return Ok(dir.join(DATABASE_FILE));
        }
    }

    let temp_dir = std::env::temp_dir().join(APP_DIR);
    std::fs::create_dir_all(&temp_dir).map_err(|source| ConfigError::DatabaseDir {
        path: temp_dir.clone(),
        source,
    })?;

    tracing::warn!("Using temporary directory for database: {}", temp_dir.display());
    Ok(temp_dir.join(DATABASE_FILE))
}

fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let probe = dir.join(".test_write");
    if std::fs::write(&probe, "test").is_ok() {
        let _ = std::fs::remove_file(&probe);
        true
    } else {
        false
    }
}
