/// Task tools

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::dates::{format_day, parse_day};
use crate::domain::{CollectionKey, Task, TaskId};
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{parse_id, remove_where, tool_response, ToolError};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddTaskParams {
    /// What needs doing
    pub title: String,
    /// Optional due date (YYYY-MM-DD); due tasks show up in the calendar
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddTaskResponse {
    pub task_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    /// ID of the task
    pub task_id: String,
}

#[derive(Debug, Serialize)]
pub struct TaskChangeResponse {
    pub message: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListTasksParams {}

#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
    pub message: String,
}

tool_response!(AddTaskResponse, TaskChangeResponse, ListTasksResponse);

/// Add a pending task at the top of the list
pub fn add_task<S: KeyValueStore>(
    repo: &Repository<S>,
    params: AddTaskParams,
) -> Result<AddTaskResponse, ToolError> {
    let due_date = params
        .due_date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(parse_day)
        .transpose()?;

    let task = Task::new(&params.title, due_date)?;
    let task_id = task.id.to_string();
    let message = match task.due_date {
        Some(due) => format!("✅ Added task '{}' (due {})", task.title, format_day(due)),
        None => format!("✅ Added task '{}'", task.title),
    };

    let mut tasks: Vec<Task> = repo.load_for_update(CollectionKey::Tasks)?;
    tasks.insert(0, task);
    repo.save(CollectionKey::Tasks, &tasks)?;

    Ok(AddTaskResponse { task_id, message })
}

/// Flip a task between pending and completed
pub fn toggle_task<S: KeyValueStore>(
    repo: &Repository<S>,
    params: TaskIdParams,
) -> Result<TaskChangeResponse, ToolError> {
    let task_id: TaskId = parse_id("Task", &params.task_id)?;

    let mut tasks: Vec<Task> = repo.load_for_update(CollectionKey::Tasks)?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Task", id: params.task_id.clone() })?;
    task.toggle();

    let message = if task.completed {
        format!("☑️ Completed '{}'", task.title)
    } else {
        format!("🔄 Reopened '{}'", task.title)
    };
    repo.save(CollectionKey::Tasks, &tasks)?;

    Ok(TaskChangeResponse { message })
}

pub fn delete_task<S: KeyValueStore>(
    repo: &Repository<S>,
    params: TaskIdParams,
) -> Result<TaskChangeResponse, ToolError> {
    let task_id: TaskId = parse_id("Task", &params.task_id)?;

    let mut tasks: Vec<Task> = repo.load_for_update(CollectionKey::Tasks)?;
    let removed = remove_where(&mut tasks, |t| t.id == task_id)
        .ok_or_else(|| ToolError::NotFound { kind: "Task", id: params.task_id.clone() })?;
    repo.save(CollectionKey::Tasks, &tasks)?;

    Ok(TaskChangeResponse {
        message: format!("🗑️ Deleted task '{}'", removed.title),
    })
}

/// Pending and completed tasks, each in stored order
pub fn list_tasks<S: KeyValueStore>(
    repo: &Repository<S>,
    _params: ListTasksParams,
) -> Result<ListTasksResponse, ToolError> {
    let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
    let (completed, pending): (Vec<Task>, Vec<Task>) = tasks.into_iter().partition(|t| t.completed);

    let message = if pending.is_empty() && completed.is_empty() {
        "No tasks yet. Add your first task to get started!".to_string()
    } else {
        let mut out = format!("{} pending, {} completed", pending.len(), completed.len());
        for task in &pending {
            out.push_str(&format!("\n⬜ {} ({}){}", task.title, task.id.short(), due_suffix(task.due_date)));
        }
        for task in &completed {
            out.push_str(&format!("\n☑️ {} ({})", task.title, task.id.short()));
        }
        out
    };

    Ok(ListTasksResponse { pending, completed, message })
}

fn due_suffix(due: Option<NaiveDate>) -> String {
    due.map(|d| format!(" · due {}", format_day(d))).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn add(repo: &Repository<MemoryStore>, title: &str, due: Option<&str>) -> String {
        add_task(repo, AddTaskParams { title: title.to_string(), due_date: due.map(String::from) })
            .unwrap()
            .task_id
    }

    #[test]
    fn test_new_tasks_go_first() {
        let repo = Repository::new(MemoryStore::new());
        add(&repo, "first", None);
        add(&repo, "second", Some("2024-03-01"));

        let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
        assert_eq!(tasks[0].title, "second");
        assert_eq!(tasks[0].due_date, Some(parse_day("2024-03-01").unwrap()));
    }

    #[test]
    fn test_bad_due_date_rejected() {
        let repo = Repository::new(MemoryStore::new());
        let result = add_task(&repo, AddTaskParams { title: "x".to_string(), due_date: Some("March 1".to_string()) });
        assert!(result.is_err());

        let tasks: Vec<Task> = repo.load(CollectionKey::Tasks);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_toggle_and_list_split() {
        let repo = Repository::new(MemoryStore::new());
        let a = add(&repo, "a", None);
        add(&repo, "b", None);

        let toggled = toggle_task(&repo, TaskIdParams { task_id: a.clone() }).unwrap();
        assert!(toggled.message.contains("Completed"));

        let listed = list_tasks(&repo, ListTasksParams::default()).unwrap();
        assert_eq!(listed.pending.len(), 1);
        assert_eq!(listed.completed.len(), 1);
        assert!(listed.message.starts_with("1 pending, 1 completed"));

        let reopened = toggle_task(&repo, TaskIdParams { task_id: a }).unwrap();
        assert!(reopened.message.contains("Reopened"));
    }

    #[test]
    fn test_delete_task() {
        let repo = Repository::new(MemoryStore::new());
        let a = add(&repo, "a", None);

        delete_task(&repo, TaskIdParams { task_id: a.clone() }).unwrap();
        assert!(matches!(
            delete_task(&repo, TaskIdParams { task_id: a }),
            Err(ToolError::NotFound { .. })
        ));
    }
}
