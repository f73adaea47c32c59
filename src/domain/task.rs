/// Task entity: a to-do item with an optional due date

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainError, TaskId};

const MAX_TITLE_LEN: usize = 200;

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Day the task shows up on in the calendar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a new, pending task
    pub fn new(title: &str, due_date: Option<NaiveDate>) -> Result<Self, DomainError> {
        Ok(Self {
            id: TaskId::new(),
            title: require_text("Task title", title, MAX_TITLE_LEN)?,
            completed: false,
            created_at: Utc::now(),
            due_date,
        })
    }

    /// Flip between pending and completed
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Whether the task is due on `date`
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == Some(date)
    }
}
