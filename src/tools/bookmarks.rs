/// Bookmark tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{Bookmark, BookmarkId, CollectionKey};
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{parse_id, plural, remove_where, tool_response, ToolError};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddBookmarkParams {
    /// Display title
    pub title: String,
    /// Link; https:// is added when no scheme is given
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AddBookmarkResponse {
    pub bookmark_id: String,
    pub url: String,
    pub message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteBookmarkParams {
    /// ID of the bookmark
    pub bookmark_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteBookmarkResponse {
    pub message: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListBookmarksParams {}

#[derive(Debug, Serialize)]
pub struct BookmarkSummary {
    pub bookmark_id: String,
    pub title: String,
    pub url: String,
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct ListBookmarksResponse {
    pub bookmarks: Vec<BookmarkSummary>,
    pub message: String,
}

tool_response!(AddBookmarkResponse, DeleteBookmarkResponse, ListBookmarksResponse);

pub fn add_bookmark<S: KeyValueStore>(
    repo: &Repository<S>,
    params: AddBookmarkParams,
) -> Result<AddBookmarkResponse, ToolError> {
    let bookmark = Bookmark::new(&params.title, &params.url)?;
    let response = AddBookmarkResponse {
        bookmark_id: bookmark.id.to_string(),
        url: bookmark.url.clone(),
        message: format!("🔖 Saved '{}' ({})", bookmark.title, bookmark.domain()),
    };

    let mut bookmarks: Vec<Bookmark> = repo.load_for_update(CollectionKey::Bookmarks)?;
    bookmarks.insert(0, bookmark);
    repo.save(CollectionKey::Bookmarks, &bookmarks)?;

    Ok(response)
}

pub fn delete_bookmark<S: KeyValueStore>(
    repo: &Repository<S>,
    params: DeleteBookmarkParams,
) -> Result<DeleteBookmarkResponse, ToolError> {
    let bookmark_id: BookmarkId = parse_id("Bookmark", &params.bookmark_id)?;

    let mut bookmarks: Vec<Bookmark> = repo.load_for_update(CollectionKey::Bookmarks)?;
    let removed = remove_where(&mut bookmarks, |b| b.id == bookmark_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Bookmark", id: params.bookmark_id.clone() })?;
    repo.save(CollectionKey::Bookmarks, &bookmarks)?;

    Ok(DeleteBookmarkResponse {
        message: format!("🗑️ Deleted bookmark '{}'", removed.title),
    })
}

pub fn list_bookmarks<S: KeyValueStore>(
    repo: &Repository<S>,
    _params: ListBookmarksParams,
) -> Result<ListBookmarksResponse, ToolError> {
    let records: Vec<Bookmark> = repo.load(CollectionKey::Bookmarks);

    let message = if records.is_empty() {
        "No bookmarks yet. Save your first link!".to_string()
    } else {
        let lines = records
            .iter()
            .map(|b| format!("🔖 {} ({}) · {}\n   {}", b.title, b.id.short(), b.domain(), b.url))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n{}", plural(records.len(), "bookmark"), lines)
    };

    let bookmarks = records
        .into_iter()
        .map(|b| BookmarkSummary {
            bookmark_id: b.id.to_string(),
            domain: b.domain(),
            title: b.title,
            url: b.url,
        })
        .collect();

    Ok(ListBookmarksResponse { bookmarks, message })
}
