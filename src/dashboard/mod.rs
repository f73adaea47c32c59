/// Dashboard summary across every collection
///
/// Reads tasks, habits, notes, diary entries and bookmarks once and reduces
/// them to the counts and recent items shown on the home screen, plus a few
/// plain-language insights.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Bookmark, CollectionKey, DiaryEntry, Habit, Note, Task};
use crate::storage::{KeyValueStore, Repository};

/// Recent tasks shown on the dashboard
pub const RECENT_TASKS: usize = 3;
/// Recent notes shown on the dashboard
pub const RECENT_NOTES: usize = 2;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub pending_tasks: usize,
    pub habits_done_today: usize,
    pub total_habits: usize,
    /// Sum of every habit's current streak
    pub total_streak_days: u32,
    pub note_count: usize,
    pub diary_count: usize,
    pub bookmark_count: usize,
    pub wrote_diary_today: bool,
    pub recent_tasks: Vec<Task>,
    pub recent_notes: Vec<Note>,
    pub insights: Vec<String>,
}

impl DashboardSummary {
    /// Load every collection and summarize it as of `today`
    pub fn build<S: KeyValueStore>(repo: &Repository<S>, today: NaiveDate) -> Self {
        let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
        let habits: Vec<Habit> = repo.load(CollectionKey::Habits);
        let notes: Vec<Note> = repo.load(CollectionKey::Notes);
        let diary: Vec<DiaryEntry> = repo.load(CollectionKey::Diary);
        let bookmarks: Vec<Bookmark> = repo.load(CollectionKey::Bookmarks);

        Self::from_records(today, &tasks, &habits, &notes, &diary, bookmarks.len())
    }

    pub fn from_records(
        today: NaiveDate,
        tasks: &[Task],
        habits: &[Habit],
        notes: &[Note],
        diary: &[DiaryEntry],
        bookmark_count: usize,
    ) -> Self {
        let pending_tasks = tasks.iter().filter(|t| !t.completed).count();
        let habits_done_today = habits.iter().filter(|h| h.is_completed_on(today)).count();
        let total_streak_days = habits.iter().map(|h| h.current_streak).fold(0, u32::saturating_add);
        let wrote_diary_today = diary.iter().any(|d| d.date == today);

        let mut summary = Self {
            pending_tasks,
            habits_done_today,
            total_habits: habits.len(),
            total_streak_days,
            note_count: notes.len(),
            diary_count: diary.len(),
            bookmark_count,
            wrote_diary_today,
            recent_tasks: tasks.iter().take(RECENT_TASKS).cloned().collect(),
            recent_notes: notes.iter().take(RECENT_NOTES).cloned().collect(),
            insights: Vec::new(),
        };
        summary.insights = summary.generate_insights(habits);
        summary
    }

    fn generate_insights(&self, habits: &[Habit]) -> Vec<String> {
        let mut insights = Vec::new();

        if habits.is_empty() {
            insights.push("Start by creating your first habit to track!".to_string());
        } else if self.habits_done_today == self.total_habits {
            insights.push("Every habit is done for today. Great work!".to_string());
        } else {
            insights.push(format!(
                "{} of {} habits still open today.",
                self.total_habits - self.habits_done_today,
                self.total_habits
            ));
        }

        if let Some(best) = habits.iter().max_by_key(|h| h.current_streak).filter(|h| h.current_streak > 1) {
            insights.push(format!("Longest running streak: '{}' at {} days.", best.name, best.current_streak));
        }

        if !self.wrote_diary_today {
            insights.push("Nothing in the diary for today yet.".to_string());
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dates::parse_day;
    use crate::domain::toggle_today;
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_dashboard() {
        let repo = Repository::new(MemoryStore::new());
        let summary = DashboardSummary::build(&repo, parse_day("2024-05-01").unwrap());

        assert_eq!(summary.pending_tasks, 0);
        assert_eq!(summary.total_streak_days, 0);
        assert!(summary.recent_tasks.is_empty());
        assert_eq!(summary.insights[0], "Start by creating your first habit to track!");
    }

    #[test]
    fn test_counts_and_recent_items() {
        let today = parse_day("2024-05-01").unwrap();
        let yesterday = parse_day("2024-04-30").unwrap();

        let mut tasks: Vec<Task> = (0..5).map(|i| Task::new(&format!("task {}", i), None).unwrap()).collect();
        tasks[1].toggle();

        let read = toggle_today(&toggle_today(&Habit::new("Read").unwrap(), yesterday), today);
        let walk = toggle_today(&Habit::new("Walk").unwrap(), yesterday);
        let notes: Vec<Note> = (0..3).map(|_| Note::new(None, None).unwrap()).collect();

        let summary = DashboardSummary::from_records(today, &tasks, &[read, walk], &notes, &[], 4);

        assert_eq!(summary.pending_tasks, 4);
        assert_eq!(summary.habits_done_today, 1);
        assert_eq!(summary.total_streak_days, 3);
        assert_eq!(summary.note_count, 3);
        assert_eq!(summary.bookmark_count, 4);
        assert_eq!(summary.recent_tasks.len(), RECENT_TASKS);
        assert_eq!(summary.recent_tasks[0].title, "task 0");
        assert_eq!(summary.recent_notes.len(), RECENT_NOTES);
        assert!(summary.insights.iter().any(|i| i.contains("'Read' at 2 days")));
    }

    #[test]
    fn test_streak_total_saturates() {
        let today = parse_day("2024-05-01").unwrap();
        let mut long = Habit::new("Read").unwrap();
        long.current_streak = u32::MAX;
        let mut short = Habit::new("Walk").unwrap();
        short.current_streak = 1;

        let summary = DashboardSummary::from_records(today, &[], &[long, short], &[], &[], 0);
        assert_eq!(summary.total_streak_days, u32::MAX);
        assert!(summary.insights.iter().any(|i| i.contains("'Read'")));
    }
}
