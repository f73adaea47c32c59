/// Diary tools

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::dates::{format_day, parse_day_or};
use crate::domain::{save_for_day, CollectionKey, DiaryEntry, DiaryEntryId, DiarySave, Mood};
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{parse_id, remove_where, tool_response, ToolError};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveDiaryParams {
    /// What happened today
    pub content: String,
    /// great, good, okay or bad (defaults to good)
    pub mood: Option<String>,
    /// Day to write for (YYYY-MM-DD, defaults to today)
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveDiaryResponse {
    pub entry_id: String,
    pub created: bool,
    pub message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DiaryEntryIdParams {
    /// ID of the diary entry
    pub entry_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteDiaryResponse {
    pub message: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListDiaryParams {}

#[derive(Debug, Serialize)]
pub struct ListDiaryResponse {
    pub entries: Vec<DiaryEntry>,
    pub has_today: bool,
    pub message: String,
}

tool_response!(SaveDiaryResponse, DeleteDiaryResponse, ListDiaryResponse);

/// Write the entry for a day, rewriting it if that day already has one
pub fn save_diary<S: KeyValueStore>(
    repo: &Repository<S>,
    params: SaveDiaryParams,
    today: NaiveDate,
) -> Result<SaveDiaryResponse, ToolError> {
    let date = parse_day_or(params.date.as_deref(), today)?;
    let mood = params
        .mood
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(str::parse::<Mood>)
        .transpose()?;

    let mut entries: Vec<DiaryEntry> = repo.load_for_update(CollectionKey::Diary)?;
    let (outcome, entry_id) = save_for_day(&mut entries, date, &params.content, mood)?;
    repo.save(CollectionKey::Diary, &entries)?;

    let message = match outcome {
        DiarySave::Created => format!("📔 Saved diary entry for {}", format_day(date)),
        DiarySave::Updated => format!("📔 Updated diary entry for {}", format_day(date)),
    };

    Ok(SaveDiaryResponse {
        entry_id: entry_id.to_string(),
        created: outcome == DiarySave::Created,
        message,
    })
}

pub fn delete_diary<S: KeyValueStore>(
    repo: &Repository<S>,
    params: DiaryEntryIdParams,
) -> Result<DeleteDiaryResponse, ToolError> {
    let entry_id: DiaryEntryId = parse_id("Diary entry", &params.entry_id)?;

    let mut entries: Vec<DiaryEntry> = repo.load_for_update(CollectionKey::Diary)?;
    let removed = remove_where(&mut entries, |e| e.id == entry_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Diary entry", id: params.entry_id.clone() })?;
    repo.save(CollectionKey::Diary, &entries)?;

    Ok(DeleteDiaryResponse {
        message: format!("🗑️ Deleted diary entry for {}", format_day(removed.date)),
    })
}

pub fn list_diary<S: KeyValueStore>(
    repo: &Repository<S>,
    _params: ListDiaryParams,
    today: NaiveDate,
) -> Result<ListDiaryResponse, ToolError> {
    let entries: Vec<DiaryEntry> = repo.load(CollectionKey::Diary);
    let has_today = entries.iter().any(|e| e.date == today);

    let message = if entries.is_empty() {
        "No diary entries yet. Start writing about your day!".to_string()
    } else {
        let lines = entries
            .iter()
            .map(|e| {
                format!(
                    "📔 {} ({}){}\n   {}",
                    e.date.format("%a, %b %-d %Y"),
                    e.id.short(),
                    e.mood.map(|m| format!(" · {}", m.display_name())).unwrap_or_default(),
                    e.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let count = if entries.len() == 1 {
            "1 entry".to_string()
        } else {
            format!("{} entries", entries.len())
        };
        format!(
            "{}{}\n{}",
            count,
            if has_today { "" } else { " · nothing written today yet" },
            lines
        )
    };

    Ok(ListDiaryResponse { entries, has_today, message })
}
