/// Month grid for the calendar view
///
/// The grid starts on Sunday. Cells before the 1st are blank; every day cell
/// collects the tasks due that day, the day's diary entry and the habits
/// completed that day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::{DiaryEntry, DomainError, EventKind, Habit, Task};

/// Something shown on a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
    pub kind: EventKind,
}

/// A year/month pair with wrap-around navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DomainError::InvalidDate(format!("{}-{:02} is not a valid month", year, month)));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// First day of the month
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the month
    pub fn days_in_month(self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            // December of the last representable year
            _ => 31,
        }
    }
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

/// A rendered month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub month: YearMonth,
    /// Blank cells before the 1st (0 when the month starts on Sunday)
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

/// Events falling on `date`
pub fn events_for_day(
    date: NaiveDate,
    tasks: &[Task],
    diary: &[DiaryEntry],
    habits: &[Habit],
) -> Vec<CalendarEvent> {
    let task_events = tasks.iter().filter(|t| t.is_due_on(date)).map(|t| CalendarEvent {
        title: t.title.clone(),
        date,
        kind: EventKind::Task,
    });

    let diary_event = diary.iter().find(|d| d.date == date).map(|_| CalendarEvent {
        title: "Diary entry".to_string(),
        date,
        kind: EventKind::Diary,
    });

    let habit_events = habits.iter().filter(|h| h.is_completed_on(date)).map(|h| CalendarEvent {
        title: h.name.clone(),
        date,
        kind: EventKind::Habit,
    });

    task_events.chain(diary_event).chain(habit_events).collect()
}

/// Build the grid for `month`
pub fn month_grid(
    month: YearMonth,
    today: NaiveDate,
    tasks: &[Task],
    diary: &[DiaryEntry],
    habits: &[Habit],
) -> MonthGrid {
    let leading_blanks = month
        .first_day()
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);

    let days = (1..=month.days_in_month())
        .filter_map(|day| NaiveDate::from_ymd_opt(month.year, month.month, day))
        .map(|date| DayCell {
            date,
            is_today: date == today,
            events: events_for_day(date, tasks, diary, habits),
        })
        .collect();

    MonthGrid { month, leading_blanks, days }
}
