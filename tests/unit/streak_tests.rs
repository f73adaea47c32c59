/// Streak engine behavior through the public API
use std::collections::BTreeSet;

use productivity_hub_mcp::*;
use productivity_hub_mcp::domain::dates::{format_day, parse_day};

fn day(s: &str) -> chrono::NaiveDate {
    parse_day(s).unwrap()
}

fn habit_with(dates: &[&str], current: u32, longest: u32) -> Habit {
    let mut habit = Habit::new("Stretch").unwrap();
    habit.completed_dates = dates.iter().map(|d| day(d)).collect::<BTreeSet<_>>();
    habit.current_streak = current;
    habit.longest_streak = longest;
    habit
}

#[test]
fn test_documented_scenario() {
    let habit = Habit::new("Read").unwrap();

    let once = toggle_today_str(&habit, "2024-01-10").unwrap();
    let dates: Vec<String> = once.completed_dates.iter().map(|d| format_day(*d)).collect();
    assert_eq!(dates, vec!["2024-01-10"]);
    assert_eq!((once.current_streak, once.longest_streak), (1, 1));

    let twice = toggle_today_str(&once, "2024-01-10").unwrap();
    assert!(twice.completed_dates.is_empty());
    assert_eq!((twice.current_streak, twice.longest_streak), (0, 1));
}

#[test]
fn test_week_of_marks() {
    let mut habit = Habit::new("Walk").unwrap();
    let start = day("2024-02-26");
    for offset in 0..7 {
        habit = toggle_today(&habit, start + chrono::Duration::days(offset));
    }

    assert_eq!(habit.current_streak, 7);
    assert_eq!(habit.longest_streak, 7);
    assert!(is_hot_streak(habit.current_streak));

    let window = recent_days(&habit.completed_dates, day("2024-03-03"));
    assert!(window.iter().all(|d| d.completed));
    assert_eq!(render_window(&window), "■■■■■■■");
}

#[test]
fn test_gap_restarts_streak() {
    let habit = habit_with(&["2024-01-07"], 3, 5);
    let marked = toggle_today(&habit, day("2024-01-10"));

    assert_eq!(marked.current_streak, 1);
    assert_eq!(marked.longest_streak, 5);
}

#[test]
fn test_malformed_today_rejected() {
    let habit = Habit::new("Read").unwrap();
    assert!(matches!(
        toggle_today_str(&habit, "10/01/2024"),
        Err(DomainError::InvalidDate(_))
    ));
}
