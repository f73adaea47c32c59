/// Calendar tool: a month grid of tasks, diary entries and habit completions

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{
    month_grid, CollectionKey, DiaryEntry, EventKind, Habit, MonthGrid, Task, YearMonth,
};
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{tool_response, ToolError};

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CalendarMonthParams {
    /// Year to show (defaults to the current year)
    pub year: Option<i32>,
    /// Month to show, 1-12 (defaults to the current month)
    pub month: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonthResponse {
    pub grid: MonthGrid,
    pub previous: YearMonth,
    pub next: YearMonth,
    pub message: String,
}

tool_response!(CalendarMonthResponse);

pub fn calendar_month<S: KeyValueStore>(
    repo: &Repository<S>,
    params: CalendarMonthParams,
    today: NaiveDate,
) -> Result<CalendarMonthResponse, ToolError> {
    let current = YearMonth::of(today);
    let month = YearMonth::new(
        params.year.unwrap_or(current.year),
        params.month.unwrap_or(current.month),
    )?;

    let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
    let diary: Vec<DiaryEntry> = repo.load(CollectionKey::Diary);
    let habits: Vec<Habit> = repo.load(CollectionKey::Habits);

    let grid = month_grid(month, today, &tasks, &diary, &habits);
    let message = render_grid(&grid);

    Ok(CalendarMonthResponse {
        previous: month.previous(),
        next: month.next(),
        grid,
        message,
    })
}

/// Text calendar followed by the days that have events
fn render_grid(grid: &MonthGrid) -> String {
    let title = grid
        .month
        .first_day()
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", grid.month.year, grid.month.month));

    let mut out = format!("📅 {}\n Su  Mo  Tu  We  Th  Fr  Sa\n", title);
    let mut column = 0;
    for _ in 0..grid.leading_blanks {
        out.push_str("    ");
        column += 1;
    }
    for cell in &grid.days {
        let marker = if cell.is_today {
            '*'
        } else if cell.events.is_empty() {
            ' '
        } else {
            '•'
        };
        out.push_str(&format!("{:>3}{}", cell.date.day(), marker));
        column += 1;
        if column % 7 == 0 {
            out.push('\n');
        }
    }
    if column % 7 != 0 {
        out.push('\n');
    }

    let busy: Vec<_> = grid.days.iter().filter(|c| !c.events.is_empty()).collect();
    if busy.is_empty() {
        out.push_str("\nNothing scheduled this month.");
    } else {
        for cell in busy {
            out.push_str(&format!("\n{}", cell.date.format("%a %-d")));
            for event in &cell.events {
                let icon = match event.kind {
                    EventKind::Task => "⬜",
                    EventKind::Diary => "📔",
                    EventKind::Habit => "✅",
                };
                out.push_str(&format!("\n   {} {}", icon, event.title));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dates::parse_day;
    use crate::storage::MemoryStore;
    use crate::tools::{add_task, save_diary, AddTaskParams, SaveDiaryParams};

    #[test]
    fn test_defaults_to_current_month() {
        let repo = Repository::new(MemoryStore::new());
        let today = parse_day("2024-12-15").unwrap();

        let response = calendar_month(&repo, CalendarMonthParams::default(), today).unwrap();
        assert_eq!(response.grid.month, YearMonth { year: 2024, month: 12 });
        assert_eq!(response.next, YearMonth { year: 2025, month: 1 });
        assert_eq!(response.previous, YearMonth { year: 2024, month: 11 });
        assert!(response.message.contains("December 2024"));
        assert!(response.message.contains("Nothing scheduled"));
    }

    #[test]
    fn test_events_listed() {
        let repo = Repository::new(MemoryStore::new());
        let today = parse_day("2024-03-10").unwrap();

        add_task(&repo, AddTaskParams { title: "Taxes".to_string(), due_date: Some("2024-03-15".to_string()) }).unwrap();
        save_diary(&repo, SaveDiaryParams { content: "ok".to_string(), mood: None, date: None }, today).unwrap();

        let response = calendar_month(&repo, CalendarMonthParams { year: Some(2024), month: Some(3) }, today).unwrap();
        assert_eq!(response.grid.days[14].events.len(), 1);
        assert_eq!(response.grid.days[9].events[0].kind, EventKind::Diary);
        assert!(response.message.contains("Taxes"));
    }

    #[test]
    fn test_invalid_month() {
        let repo = Repository::new(MemoryStore::new());
        let today = parse_day("2024-03-10").unwrap();

        let result = calendar_month(&repo, CalendarMonthParams { year: None, month: Some(13) }, today);
        assert!(matches!(result, Err(ToolError::Domain(_))));
    }
}
