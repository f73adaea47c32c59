/// Diary entries: at most one per calendar day, with an optional mood

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DiaryEntryId, DomainError, Mood};

const MAX_CONTENT_LEN: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: DiaryEntryId,
    pub date: NaiveDate,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl DiaryEntry {
    pub fn new(date: NaiveDate, content: &str, mood: Option<Mood>) -> Result<Self, DomainError> {
        Ok(Self {
            id: DiaryEntryId::new(),
            date,
            content: require_text("Diary content", content, MAX_CONTENT_LEN)?,
            mood,
        })
    }

    /// Rewrite the entry for its day
    pub fn rewrite(&mut self, content: &str, mood: Option<Mood>) -> Result<(), DomainError> {
        self.content = require_text("Diary content", content, MAX_CONTENT_LEN)?;
        self.mood = mood;
        Ok(())
    }
}

/// Whether saving created a new entry or rewrote the day's existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiarySave {
    Created,
    Updated,
}

/// Save the entry for `date` into `entries`
///
/// Rewrites the existing entry for that date in place, otherwise inserts a new
/// entry at the front. A missing mood is stored as [`Mood::Good`].
pub fn save_for_day(
    entries: &mut Vec<DiaryEntry>,
    date: NaiveDate,
    content: &str,
    mood: Option<Mood>,
) -> Result<(DiarySave, DiaryEntryId), DomainError> {
    let mood = Some(mood.unwrap_or_default());

    if let Some(existing) = entries.iter_mut().find(|e| e.date == date) {
        existing.rewrite(content, mood)?;
        return Ok((DiarySave::Updated, existing.id));
    }

    let entry = DiaryEntry::new(date, content, mood)?;
    let id = entry.id;
    entries.insert(0, entry);
    Ok((DiarySave::Created, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dates::parse_day;

    #[test]
    fn test_save_creates_then_updates_same_day() {
        let day = parse_day("2024-04-01").unwrap();
        let mut entries = Vec::new();

        let (first, id) = save_for_day(&mut entries, day, "Long walk", None).unwrap();
        assert_eq!(first, DiarySave::Created);
        assert_eq!(entries[0].mood, Some(Mood::Good));

        let (second, same_id) = save_for_day(&mut entries, day, "Long walk, then rain", Some(Mood::Okay)).unwrap();
        assert_eq!(second, DiarySave::Updated);
        assert_eq!(id, same_id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "Long walk, then rain");
        assert_eq!(entries[0].mood, Some(Mood::Okay));
    }

    #[test]
    fn test_new_day_goes_to_front() {
        let mut entries = Vec::new();
        save_for_day(&mut entries, parse_day("2024-04-01").unwrap(), "one", None).unwrap();
        save_for_day(&mut entries, parse_day("2024-04-02").unwrap(), "two", None).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "two");
    }

    #[test]
    fn test_blank_content_rejected() {
        let mut entries = Vec::new();
        assert!(save_for_day(&mut entries, parse_day("2024-04-01").unwrap(), " \n", None).is_err());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_mood_is_optional_in_json() {
        let json = serde_json::json!({
            "id": DiaryEntryId::new(),
            "date": "2024-04-01",
            "content": "quiet day"
        });
        let entry: DiaryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(entry.mood, None);
    }
}
