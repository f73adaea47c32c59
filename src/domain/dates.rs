/// Calendar-date helpers shared by the streak engine, the day window and the
/// calendar grid.
///
/// Every date crossing a boundary (tool arguments, persisted JSON) is a
/// `YYYY-MM-DD` string; inside the crate it is a `NaiveDate`.

use chrono::{Days, NaiveDate, Utc};

use crate::domain::DomainError;

/// The one date format used for storage and tool arguments
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current calendar date in UTC
///
/// Only the server calls this; everything below it takes `today` as an argument.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a strict `YYYY-MM-DD` string
pub fn parse_day(s: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = s.trim();

    // chrono accepts unpadded fields; the stored format never has them
    if trimmed.len() != 10 {
        return Err(DomainError::InvalidDate(format!(
            "'{}' is not a YYYY-MM-DD date",
            s
        )));
    }

    NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
        .map_err(|_| DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", s)))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// The calendar date immediately preceding `date`
///
/// Saturates at the earliest representable date.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// The `count` most recent dates ending at `today`, oldest first
pub fn last_n_days(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .collect()
}

/// Parse an optional date argument, falling back to `today`
pub fn parse_day_or(value: Option<&str>, today: NaiveDate) -> Result<NaiveDate, DomainError> {
    match value {
        Some(s) if !s.trim().is_empty() => parse_day(s),
        _ => Ok(today),
    }
}
