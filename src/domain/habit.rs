/// Habit entity and related functionality
///
/// This module defines the Habit struct: a named daily habit with the set of
/// days it was completed and its cached streak counters.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId};

/// Longest habit name accepted
const MAX_NAME_LEN: usize = 100;

/// A habit the user wants to do every day
///
/// `current_streak` and `longest_streak` are cached values. They are only
/// ever changed by [`crate::domain::toggle_today`], together with
/// `completed_dates`, and are never recomputed from the full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Every day this habit was marked done
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Consecutive completed days ending at the most recent one reachable from today
    #[serde(default)]
    pub current_streak: u32,
    /// Best value `current_streak` has ever reached
    #[serde(default)]
    pub longest_streak: u32,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with an empty history and zero streaks
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            completed_dates: BTreeSet::new(),
            current_streak: 0,
            longest_streak: 0,
            created_at: Utc::now(),
        })
    }

    /// Whether the habit was marked done on `date`
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Most recent completed day, if any
    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completed_dates.iter().next_back().copied()
    }

    /// Total number of completed days
    pub fn total_completions(&self) -> usize {
        self.completed_dates.len()
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHabitName(format!(
                "Habit name cannot be longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(trimmed.to_string())
    }
}
