use crate::models::{Task, TaskPriority, TaskStatus};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Due date ascending; tasks without a due date sort last.
    #[default]
    DueDate,
    /// Priority descending (high=3, medium=2, low=1).
    Priority,
    /// Creation date descending.
    Created,
    /// Progress descending.
    Progress,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid sort order: {0}")]
pub struct ParseSortByError(String);

impl FromStr for SortBy {
    type Err = ParseSortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "due" | "due-date" | "duedate" => Ok(SortBy::DueDate),
            "priority" => Ok(SortBy::Priority),
            "created" => Ok(SortBy::Created),
            "progress" => Ok(SortBy::Progress),
            _ => Err(ParseSortByError(s.to_string())),
        }
    }
}

/// Filter and sort criteria for listing tasks. Unset filters match
/// everything; all set filters must match.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Case-insensitive substring match against title, description, or tags.
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub sort: SortBy,
}

impl TaskQuery {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = task.title.to_lowercase().contains(&term)
                || task.description.to_lowercase().contains(&term)
                || task.tags.iter().any(|t| t.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &task.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        true
    }
}

/// Stable sort; equal keys keep their relative order.
pub fn sort_tasks(tasks: &mut [Task], sort: SortBy) {
    match sort {
        SortBy::DueDate => tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }),
        SortBy::Priority => tasks.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight())),
        SortBy::Created => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Progress => tasks.sort_by(|a, b| b.progress.cmp(&a.progress)),
    }
}
