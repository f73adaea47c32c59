/// Habit tools: create, toggle today, list with recent days, delete

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{
    is_hot_streak, motivational_message, recent_days, render_window, toggle_today,
    CollectionKey, DayMark, Habit, HabitId, ToggleAction,
};
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{parse_id, plural, remove_where, tool_response, ToolError};

/// Parameters for creating a new habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateHabitParams {
    /// Name of the habit
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub habit_id: String,
    pub message: String,
}

/// Parameters for toggling today's completion
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleHabitParams {
    /// ID of the habit to mark or unmark for today
    pub habit_id: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleHabitResponse {
    pub habit_id: String,
    pub completed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub message: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListHabitsParams {}

/// One habit as shown in the list
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    pub name: String,
    pub completed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub hot_streak: bool,
    pub total_completions: usize,
    pub last_completed: Option<NaiveDate>,
    pub last_7_days: Vec<DayMark>,
}

#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub completed_today: usize,
    pub message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteHabitParams {
    /// ID of the habit to delete
    pub habit_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub message: String,
}

tool_response!(CreateHabitResponse, ToggleHabitResponse, ListHabitsResponse, DeleteHabitResponse);

/// Create a new habit with zero streaks, appended to the list
pub fn create_habit<S: KeyValueStore>(
    repo: &Repository<S>,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, ToolError> {
    let habit = Habit::new(&params.name)?;
    let habit_id = habit.id.to_string();

    let mut habits: Vec<Habit> = repo.load_for_update(CollectionKey::Habits)?;
    let message = format!("✅ Created habit '{}'! Ready to start your streak!", habit.name);
    habits.push(habit);
    repo.save(CollectionKey::Habits, &habits)?;

    tracing::debug!("Created habit {}", habit_id);
    Ok(CreateHabitResponse { habit_id, message })
}

/// Mark or unmark `today` for one habit and persist the new streaks
pub fn toggle_habit<S: KeyValueStore>(
    repo: &Repository<S>,
    params: ToggleHabitParams,
    today: NaiveDate,
) -> Result<ToggleHabitResponse, ToolError> {
    let habit_id: HabitId = parse_id("Habit", &params.habit_id)?;

    let mut habits: Vec<Habit> = repo.load_for_update(CollectionKey::Habits)?;
    let slot = habits
        .iter_mut()
        .find(|h| h.id == habit_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Habit", id: params.habit_id.clone() })?;

    let action = ToggleAction::for_habit(slot, today);
    *slot = toggle_today(slot, today);
    let updated = slot.clone();
    repo.save(CollectionKey::Habits, &habits)?;

    tracing::debug!(
        "Toggled habit {} ({:?}): current {} longest {}",
        habit_id,
        action,
        updated.current_streak,
        updated.longest_streak
    );

    let message = match action {
        ToggleAction::Marked => format!(
            "🔥 Marked '{}' done for today! Current streak: {} (best {}).\n{}",
            updated.name,
            plural(updated.current_streak as usize, "day"),
            updated.longest_streak,
            motivational_message(updated.current_streak)
        ),
        ToggleAction::Unmarked => format!(
            "↩️ Unmarked '{}' for today. Current streak: {} (best {}).",
            updated.name,
            plural(updated.current_streak as usize, "day"),
            updated.longest_streak
        ),
    };

    Ok(ToggleHabitResponse {
        habit_id: habit_id.to_string(),
        completed_today: action == ToggleAction::Marked,
        current_streak: updated.current_streak,
        longest_streak: updated.longest_streak,
        message,
    })
}

/// List every habit with today's status and the last seven days
pub fn list_habits<S: KeyValueStore>(
    repo: &Repository<S>,
    _params: ListHabitsParams,
    today: NaiveDate,
) -> Result<ListHabitsResponse, ToolError> {
    let habits: Vec<Habit> = repo.load(CollectionKey::Habits);

    let summaries: Vec<HabitSummary> = habits
        .iter()
        .map(|habit| HabitSummary {
            habit_id: habit.id.to_string(),
            name: habit.name.clone(),
            completed_today: habit.is_completed_on(today),
            current_streak: habit.current_streak,
            longest_streak: habit.longest_streak,
            hot_streak: is_hot_streak(habit.current_streak),
            total_completions: habit.total_completions(),
            last_completed: habit.last_completed(),
            last_7_days: recent_days(&habit.completed_dates, today),
        })
        .collect();

    let completed_today = summaries.iter().filter(|h| h.completed_today).count();

    let message = if summaries.is_empty() {
        "No habits yet. Start tracking your daily habits!".to_string()
    } else {
        let lines = habits
            .iter()
            .zip(&summaries)
            .map(|(habit, h)| {
                format!(
                    "{} {} ({})\n   {} 7 days ago → today | Current: {} | Best: {}{}",
                    if h.completed_today { "✅" } else { "⬜" },
                    h.name,
                    habit.id.short(),
                    render_window(&h.last_7_days),
                    plural(h.current_streak as usize, "day"),
                    plural(h.longest_streak as usize, "day"),
                    if h.hot_streak { " 🔥" } else { "" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "📋 Habits ({} of {} done today)\n\n{}",
            completed_today,
            summaries.len(),
            lines
        )
    };

    Ok(ListHabitsResponse {
        habits: summaries,
        completed_today,
        message,
    })
}

/// Delete a habit and its whole history
pub fn delete_habit<S: KeyValueStore>(
    repo: &Repository<S>,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, ToolError> {
    let habit_id: HabitId = parse_id("Habit", &params.habit_id)?;

    let mut habits: Vec<Habit> = repo.load_for_update(CollectionKey::Habits)?;
    let removed = remove_where(&mut habits, |h| h.id == habit_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Habit", id: params.habit_id.clone() })?;
    repo.save(CollectionKey::Habits, &habits)?;

    tracing::debug!("Deleted habit {}", habit_id);
    Ok(DeleteHabitResponse {
        message: format!("🗑️ Deleted habit '{}'", removed.name),
    })
}
