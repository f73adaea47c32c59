/// MCP tools, one function per user action
///
/// Every tool takes the repository and its parameters, performs one
/// load-mutate-save cycle against a single collection (or reads several for
/// the calendar and dashboard) and returns a response carrying a
/// human-readable message. Tools that depend on the current day receive it
/// as an argument.

pub mod habits;
pub mod tasks;
pub mod notes;
pub mod diary;
pub mod bookmarks;
pub mod calendar;
pub mod dashboard;

// Re-export tool functions for easy access
pub use habits::*;
pub use tasks::*;
pub use notes::*;
pub use diary::*;
pub use bookmarks::*;
pub use calendar::*;
pub use dashboard::*;

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors a tool call can report back to the client
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid {kind} ID: {id}")]
    InvalidId { kind: &'static str, id: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Anything a tool returns
pub trait ToolResponse: Serialize {
    /// Text shown to the user
    fn message(&self) -> &str;
}

/// Implement [`ToolResponse`] for response structs with a `message` field
macro_rules! tool_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::tools::ToolResponse for $ty {
                fn message(&self) -> &str {
                    &self.message
                }
            }
        )+
    };
}
pub(crate) use tool_response;

/// Parse a record ID argument
pub(crate) fn parse_id<T: FromStr>(kind: &'static str, raw: &str) -> Result<T, ToolError> {
    raw.trim().parse().map_err(|_| ToolError::InvalidId {
        kind,
        id: raw.to_string(),
    })
}

/// Remove the first record matching `pred`, returning it
pub(crate) fn remove_where<T>(records: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    let index = records.iter().position(pred)?;
    Some(records.remove(index))
}

/// "1 day" / "3 days"
pub(crate) fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
