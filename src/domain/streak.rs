/// Streak engine for daily habits
///
/// Toggling "today" on a habit flips today's completion and adjusts the cached
/// streak counters incrementally. The only history the engine consults is
/// whether yesterday was completed; it never rescans `completed_dates`.

use chrono::NaiveDate;

use crate::domain::dates::{parse_day, previous_day};
use crate::domain::{DomainError, Habit};

/// Streak length from which a habit counts as "on fire"
pub const HOT_STREAK_DAYS: u32 = 7;

/// Which way a toggle went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Today was added to the completed days
    Marked,
    /// Today was removed from the completed days
    Unmarked,
}

impl ToggleAction {
    /// The action a toggle on `today` would perform for `habit`
    pub fn for_habit(habit: &Habit, today: NaiveDate) -> Self {
        if habit.is_completed_on(today) {
            ToggleAction::Unmarked
        } else {
            ToggleAction::Marked
        }
    }
}

/// Mark or unmark `today` for a habit, returning the updated habit
///
/// Marking continues the streak when yesterday was completed, and also when
/// the current streak is zero (a zero streak may always start fresh). Any
/// other mark restarts the streak at 1. Unmarking steps the streak down by one,
/// floored at zero. `longest_streak` is a high-water mark and never decreases.
pub fn toggle_today(habit: &Habit, today: NaiveDate) -> Habit {
    let mut updated = habit.clone();

    let new_streak = match ToggleAction::for_habit(habit, today) {
        ToggleAction::Marked => {
            updated.completed_dates.insert(today);

            let yesterday = previous_day(today);
            if habit.is_completed_on(yesterday) || habit.current_streak == 0 {
                habit.current_streak.saturating_add(1)
            } else {
                1
            }
        }
        ToggleAction::Unmarked => {
            updated.completed_dates.remove(&today);
            habit.current_streak.saturating_sub(1)
        }
    };

    updated.current_streak = new_streak;
    updated.longest_streak = habit.longest_streak.max(new_streak);
    updated
}

/// Same as [`toggle_today`], for a `today` that arrives as a string
///
/// A malformed date is rejected before any streak arithmetic runs.
pub fn toggle_today_str(habit: &Habit, today: &str) -> Result<Habit, DomainError> {
    let today = parse_day(today)?;
    Ok(toggle_today(habit, today))
}

/// Whether a streak is long enough to be highlighted
pub fn is_hot_streak(streak: u32) -> bool {
    streak >= HOT_STREAK_DAYS
}

/// Get a motivational message based on current streak status
pub fn motivational_message(streak: u32) -> String {
    match streak {
        0 => "Ready to start your streak! Every journey begins with a single step.".to_string(),
        1 => "Great start! One day down, keep the momentum going.".to_string(),
        2..=6 => format!("Nice work! {} days in a row. You're building a strong habit.", streak),
        7..=13 => format!("Excellent! {} days strong. You're in the groove now!", streak),
        14..=29 => format!("Amazing! {} days straight. This is becoming second nature.", streak),
        30..=99 => format!("Incredible! {} days of consistency. You're a habit master!", streak),
        _ => format!("Legendary! {} days of unwavering commitment. You're an inspiration!", streak),
    }
}
