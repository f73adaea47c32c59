/// Note entity: free-form titled text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainError, NoteId};

/// Title given to a note when it is first created
pub const UNTITLED_NOTE: &str = "Untitled Note";

const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create an empty note, titled [`UNTITLED_NOTE`] unless a title is given
    pub fn new(title: Option<&str>, content: Option<&str>) -> Result<Self, DomainError> {
        let title = match title {
            Some(t) if !t.trim().is_empty() => require_text("Note title", t, MAX_TITLE_LEN)?,
            _ => UNTITLED_NOTE.to_string(),
        };
        let now = Utc::now();

        Ok(Self {
            id: NoteId::new(),
            title,
            content: content.unwrap_or_default().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace title and/or content, refreshing `updated_at`
    pub fn update(&mut self, title: Option<&str>, content: Option<&str>) -> Result<(), DomainError> {
        let new_title = title
            .map(|t| require_text("Note title", t, MAX_TITLE_LEN))
            .transpose()?;

        if let Some(t) = new_title {
            self.title = t;
        }
        if let Some(c) = content {
            self.content = c.to_string();
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// First line of the content, for list views
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            return "No content".to_string();
        }
        if first_line.chars().count() > max_chars {
            let cut: String = first_line.chars().take(max_chars).collect();
            format!("{}…", cut)
        } else {
            first_line.to_string()
        }
    }
}
