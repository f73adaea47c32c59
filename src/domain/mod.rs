/// Domain module containing core business logic and data types
///
/// This module defines the records each productivity module keeps (habits,
/// tasks, notes, diary entries, bookmarks), the habit streak engine, and the
/// date helpers they all share. Nothing in here performs I/O.

pub mod types;
pub mod dates;
pub mod habit;
pub mod streak;
pub mod window;
pub mod task;
pub mod note;
pub mod diary;
pub mod bookmark;
pub mod calendar;

// Re-export public types for easy access
pub use types::*;
pub use habit::*;
pub use streak::*;
pub use window::*;
pub use task::*;
pub use note::*;
pub use diary::*;
pub use bookmark::*;
pub use calendar::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

/// Reject blank text fields, returning the trimmed value
pub(crate) fn require_text(field: &str, value: &str, max_len: usize) -> Result<String, DomainError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(DomainError::Validation {
            message: format!("{} cannot be empty", field),
        });
    }

    if trimmed.chars().count() > max_len {
        return Err(DomainError::Validation {
            message: format!("{} cannot be longer than {} characters", field, max_len),
        });
    }

    Ok(trimmed.to_string())
}
