/// Note tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{CollectionKey, Note, NoteId};
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{parse_id, plural, remove_where, tool_response, ToolError};

/// Preview length in list output
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    /// Title (defaults to "Untitled Note")
    pub title: Option<String>,
    /// Initial content
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateNoteResponse {
    pub note_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    /// ID of the note to edit
    pub note_id: String,
    /// New title (optional)
    pub title: Option<String>,
    /// New content (optional, replaces the old content)
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoteIdParams {
    /// ID of the note
    pub note_id: String,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub note: Option<Note>,
    pub message: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListNotesParams {}

#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
    pub message: String,
}

tool_response!(CreateNoteResponse, NoteResponse, ListNotesResponse);

pub fn create_note<S: KeyValueStore>(
    repo: &Repository<S>,
    params: CreateNoteParams,
) -> Result<CreateNoteResponse, ToolError> {
    let note = Note::new(params.title.as_deref(), params.content.as_deref())?;
    let note_id = note.id.to_string();
    let message = format!("📝 Created note '{}'", note.title);

    let mut notes: Vec<Note> = repo.load_for_update(CollectionKey::Notes)?;
    notes.insert(0, note);
    repo.save(CollectionKey::Notes, &notes)?;

    Ok(CreateNoteResponse { note_id, message })
}

pub fn update_note<S: KeyValueStore>(
    repo: &Repository<S>,
    params: UpdateNoteParams,
) -> Result<NoteResponse, ToolError> {
    let note_id: NoteId = parse_id("Note", &params.note_id)?;

    let mut notes: Vec<Note> = repo.load_for_update(CollectionKey::Notes)?;
    let note = notes
        .iter_mut()
        .find(|n| n.id == note_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Note", id: params.note_id.clone() })?;
    note.update(params.title.as_deref(), params.content.as_deref())?;

    let updated = note.clone();
    repo.save(CollectionKey::Notes, &notes)?;

    Ok(NoteResponse {
        message: format!("💾 Saved note '{}'", updated.title),
        note: Some(updated),
    })
}

/// Full text of one note
pub fn get_note<S: KeyValueStore>(
    repo: &Repository<S>,
    params: NoteIdParams,
) -> Result<NoteResponse, ToolError> {
    let note_id: NoteId = parse_id("Note", &params.note_id)?;

    let notes: Vec<Note> = repo.load(CollectionKey::Notes);
    let note = notes
        .into_iter()
        .find(|n| n.id == note_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Note", id: params.note_id.clone() })?;

    let body = if note.content.trim().is_empty() {
        "No content yet."
    } else {
        note.content.as_str()
    };
    let message = format!(
        "📝 {}\nLast edited {}\n\n{}",
        note.title,
        note.updated_at.format("%Y-%m-%d %H:%M"),
        body
    );

    Ok(NoteResponse { note: Some(note), message })
}

pub fn delete_note<S: KeyValueStore>(
    repo: &Repository<S>,
    params: NoteIdParams,
) -> Result<NoteResponse, ToolError> {
    let note_id: NoteId = parse_id("Note", &params.note_id)?;

    let mut notes: Vec<Note> = repo.load_for_update(CollectionKey::Notes)?;
    let removed = remove_where(&mut notes, |n| n.id == note_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Note", id: params.note_id.clone() })?;
    repo.save(CollectionKey::Notes, &notes)?;

    Ok(NoteResponse {
        note: None,
        message: format!("🗑️ Deleted note '{}'", removed.title),
    })
}

pub fn list_notes<S: KeyValueStore>(
    repo: &Repository<S>,
    _params: ListNotesParams,
) -> Result<ListNotesResponse, ToolError> {
    let notes: Vec<Note> = repo.load(CollectionKey::Notes);

    let message = if notes.is_empty() {
        "No notes yet. Create your first note to get started!".to_string()
    } else {
        let lines = notes
            .iter()
            .map(|n| {
                format!(
                    "📝 {} ({}) · {}\n   {}",
                    n.title,
                    n.id.short(),
                    n.updated_at.format("%Y-%m-%d"),
                    n.preview(PREVIEW_CHARS)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n{}", plural(notes.len(), "note"), lines)
    };

    Ok(ListNotesResponse { notes, message })
}
