/// Core types shared by every record module
///
/// This module defines the typed identifiers for each kind of record plus the
/// small enums (Mood, EventKind, CollectionKey) that the records and the
/// storage layer refer to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declare a UUID-backed identifier type for one kind of record
///
/// Each record kind gets its own wrapper so a task ID can never be passed
/// where a habit ID is expected.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse an identifier from its string form
            pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s.trim())?))
            }

            /// First eight characters, used in tool output
            pub fn short(&self) -> String {
                self.0.to_string()[..8].to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }
    };
}

record_id!(
    /// Unique identifier for a habit
    HabitId
);
record_id!(
    /// Unique identifier for a task
    TaskId
);
record_id!(
    /// Unique identifier for a note
    NoteId
);
record_id!(
    /// Unique identifier for a diary entry
    DiaryEntryId
);
record_id!(
    /// Unique identifier for a bookmark
    BookmarkId
);

/// How the day went, attached optionally to a diary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Bad,
}

impl Mood {
    /// Get the display name for this mood
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Bad => "Bad",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Good
    }
}

impl FromStr for Mood {
    type Err = crate::domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "okay" => Ok(Mood::Okay),
            "bad" => Ok(Mood::Bad),
            other => Err(crate::domain::DomainError::InvalidValue {
                message: format!("Invalid mood '{}'. Valid options: great, good, okay, bad", other),
            }),
        }
    }
}

/// What produced a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Diary,
    Habit,
}

/// Storage key for each persisted collection
///
/// Every module keeps its whole collection as one JSON array under one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Tasks,
    Notes,
    Diary,
    Bookmarks,
    Habits,
}

impl CollectionKey {
    /// The key string used in the key-value store
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Tasks => "tasks",
            CollectionKey::Notes => "notes",
            CollectionKey::Diary => "diary",
            CollectionKey::Bookmarks => "bookmarks",
            CollectionKey::Habits => "habits",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
