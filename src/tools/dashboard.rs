/// Dashboard tool

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardSummary;
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{plural, tool_response, ToolError};

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DashboardParams {}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub message: String,
}

tool_response!(DashboardResponse);

pub fn dashboard<S: KeyValueStore>(
    repo: &Repository<S>,
    _params: DashboardParams,
    today: NaiveDate,
) -> Result<DashboardResponse, ToolError> {
    let summary = DashboardSummary::build(repo, today);

    let mut message = format!(
        "🏠 {}\n\n⬜ {} pending\n✅ {}/{} habits done today\n🔥 {} of streaks\n📝 {} · 📔 {} · 🔖 {}",
        today.format("%A, %B %-d"),
        plural(summary.pending_tasks, "task"),
        summary.habits_done_today,
        summary.total_habits,
        plural(summary.total_streak_days as usize, "day"),
        plural(summary.note_count, "note"),
        if summary.diary_count == 1 {
            "1 diary entry".to_string()
        } else {
            format!("{} diary entries", summary.diary_count)
        },
        plural(summary.bookmark_count, "bookmark"),
    );

    if !summary.recent_tasks.is_empty() {
        message.push_str("\n\nRecent tasks:");
        for task in &summary.recent_tasks {
            let mark = if task.completed { "☑️" } else { "⬜" };
            message.push_str(&format!("\n   {} {}", mark, task.title));
        }
    }
    if !summary.recent_notes.is_empty() {
        message.push_str("\n\nRecent notes:");
        for note in &summary.recent_notes {
            message.push_str(&format!("\n   📝 {}", note.title));
        }
    }
    for insight in &summary.insights {
        message.push_str(&format!("\n\n💡 {}", insight));
    }

    Ok(DashboardResponse { summary, message })
}
