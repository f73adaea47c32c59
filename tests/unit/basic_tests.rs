/// Basic unit tests to verify core functionality
use productivity_hub_mcp::*;
use productivity_hub_mcp::domain::dates::parse_day;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("  Test Habit ").unwrap();

        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.longest_streak, 0);
        assert!(habit.completed_dates.is_empty());
    }

    #[test]
    fn test_record_creation() {
        let task = Task::new("Write report", Some(parse_day("2024-04-01").unwrap())).unwrap();
        assert!(!task.completed);

        let note = Note::new(None, Some("body")).unwrap();
        assert_eq!(note.title, UNTITLED_NOTE);

        let bookmark = Bookmark::new("Rust", "www.rust-lang.org").unwrap();
        assert_eq!(bookmark.url, "https://www.rust-lang.org");
        assert_eq!(bookmark.domain(), "rust-lang.org");

        let entry = DiaryEntry::new(parse_day("2024-04-01").unwrap(), "quiet day", Some(Mood::Okay)).unwrap();
        assert_eq!(entry.mood, Some(Mood::Okay));
    }

    #[test]
    fn test_collection_keys() {
        let keys: Vec<&str> = [
            CollectionKey::Tasks,
            CollectionKey::Notes,
            CollectionKey::Diary,
            CollectionKey::Bookmarks,
            CollectionKey::Habits,
        ]
        .iter()
        .map(|k| k.as_str())
        .collect();
        assert_eq!(keys, vec!["tasks", "notes", "diary", "bookmarks", "habits"]);
    }

    #[test]
    fn test_hub_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let hub = ProductivityHub::new(temp_file.path().to_path_buf());
        assert!(hub.is_ok());
    }

    #[test]
    fn test_pinned_today() {
        let day = parse_day("2030-06-15").unwrap();
        let hub = ProductivityHub::with_store(MemoryStore::new()).with_today(day);
        assert_eq!(hub.today(), day);
    }

    #[test]
    fn test_store_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store = SqliteStore::new(temp_file.path());
        assert!(store.is_ok());
    }
}
