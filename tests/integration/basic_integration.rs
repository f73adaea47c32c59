/// Basic integration tests
use productivity_hub_mcp::*;
use productivity_hub_mcp::domain::dates::parse_day;
use productivity_hub_mcp::tools::{self, *};
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[test]
    fn test_hub_basic_workflow() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let hub = ProductivityHub::new(temp_file.path().to_path_buf())
            .expect("Failed to create hub")
            .with_today(parse_day("2024-01-10").unwrap());
        let repo = hub.repository();

        let habit_id = create_habit(repo, CreateHabitParams { name: "Read".to_string() })
            .unwrap()
            .habit_id;
        toggle_habit(repo, ToggleHabitParams { habit_id }, hub.today()).unwrap();
        add_task(repo, AddTaskParams { title: "Pay rent".to_string(), due_date: Some("2024-01-31".to_string()) }).unwrap();
        save_diary(
            repo,
            SaveDiaryParams { content: "Good day".to_string(), mood: Some("great".to_string()), date: None },
            hub.today(),
        )
        .unwrap();

        let summary = DashboardSummary::build(repo, hub.today());
        assert_eq!(summary.pending_tasks, 1);
        assert_eq!(summary.habits_done_today, 1);
        assert_eq!(summary.total_streak_days, 1);
        assert!(summary.wrote_diary_today);

        let month = calendar_month(repo, CalendarMonthParams::default(), hub.today()).unwrap();
        let jan_10 = &month.grid.days[9];
        assert!(jan_10.is_today);
        assert_eq!(jan_10.events.len(), 2);
        assert_eq!(month.grid.days[30].events[0].title, "Pay rent");
    }

    #[test]
    fn test_database_persistence() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();
        let today = parse_day("2024-03-05").unwrap();

        {
            let hub = ProductivityHub::new(db_path.clone()).expect("Failed to create first hub");
            let repo = hub.repository();
            let habit_id = create_habit(repo, CreateHabitParams { name: "Run".to_string() })
                .unwrap()
                .habit_id;
            toggle_habit(repo, ToggleHabitParams { habit_id: habit_id.clone() }, today.pred_opt().unwrap()).unwrap();
            toggle_habit(repo, ToggleHabitParams { habit_id }, today).unwrap();
            add_bookmark(repo, AddBookmarkParams { title: "Docs".to_string(), url: "docs.rs".to_string() }).unwrap();
        }

        let hub = ProductivityHub::new(db_path).expect("Failed to reopen hub");
        let repo = hub.repository();

        let habits: Vec<Habit> = repo.load(CollectionKey::Habits);
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].current_streak, 2);
        assert_eq!(habits[0].longest_streak, 2);
        assert_eq!(habits[0].completed_dates.len(), 2);

        let bookmarks = list_bookmarks(repo, ListBookmarksParams::default()).unwrap();
        assert_eq!(bookmarks.bookmarks[0].domain, "docs.rs");
    }

    #[test]
    fn test_corrupt_collection_recovers_empty() {
        let hub = ProductivityHub::in_memory().expect("Failed to create hub");
        let repo = hub.repository();

        repo.store().set_item("tasks", "{not an array").unwrap();
        let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
        assert!(tasks.is_empty());

        tools::add_task(repo, AddTaskParams { title: "Fresh start".to_string(), due_date: None }).unwrap();
        let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_stored_json_shape() {
        let hub = ProductivityHub::with_store(MemoryStore::new());
        let repo = hub.repository();
        create_habit(repo, CreateHabitParams { name: "Floss".to_string() }).unwrap();

        let raw = repo.store().get_item("habits").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let habit = &value[0];
        assert!(habit["completedDates"].is_array());
        assert_eq!(habit["currentStreak"], 0);
        assert_eq!(habit["longestStreak"], 0);
        assert!(habit["createdAt"].is_string());
    }
}
