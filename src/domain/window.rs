/// Recent-days completion window shown next to each habit

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::dates::last_n_days;

/// Number of days in the habit visualization, today included
pub const WINDOW_DAYS: u32 = 7;

/// One day in the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMark {
    pub date: NaiveDate,
    pub completed: bool,
    pub is_today: bool,
}

/// Completion booleans for the last [`WINDOW_DAYS`] days, oldest first
pub fn recent_days(completed_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> Vec<DayMark> {
    last_n_days(today, WINDOW_DAYS)
        .into_iter()
        .map(|date| DayMark {
            date,
            completed: completed_dates.contains(&date),
            is_today: date == today,
        })
        .collect()
}

/// Compact text form, e.g. `■■□□■■□` (oldest on the left)
pub fn render_window(days: &[DayMark]) -> String {
    days.iter()
        .map(|d| if d.completed { '■' } else { '□' })
        .collect()
}
