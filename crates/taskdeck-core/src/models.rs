use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Numeric weight used for priority sorting (high=3, medium=2, low=1).
    pub fn weight(self) -> u8 {
        match self {
            TaskPriority::Low => 1,
            TaskPriority::Medium => 2,
            TaskPriority::High => 3,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task priority: {0}")]
pub struct ParseTaskPriorityError(String);

impl FromStr for TaskPriority {
    type Err = ParseTaskPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(ParseTaskPriorityError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task status: {0}")]
pub struct ParseTaskStatusError(String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(ParseTaskStatusError(s.to_string())),
        }
    }
}

/// An entry in the fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

/// The fixed category set, in display order. Order matters: ties in
/// "most active category" are broken by first occurrence in this list,
/// and unknown category keys fall back to the first entry for display.
pub const TASK_CATEGORIES: [Category; 7] = [
    Category { id: "work", label: "Work" },
    Category { id: "personal", label: "Personal" },
    Category { id: "study", label: "Study" },
    Category { id: "home", label: "Home" },
    Category { id: "health", label: "Health" },
    Category { id: "shopping", label: "Shopping" },
    Category { id: "hobby", label: "Hobby" },
];

pub fn category_info(id: &str) -> &'static Category {
    TASK_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&TASK_CATEGORIES[0])
}

pub fn is_known_category(id: &str) -> bool {
    TASK_CATEGORIES.iter().any(|c| c.id == id)
}

/// A user-tracked unit of work. Persisted with camelCase field names so
/// backup documents stay interchangeable with the original web dashboard's
/// exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// 0-100. Kept in sync with `status` only through the explicit
    /// `set_status`/`set_progress` transitions, not through field patches.
    pub progress: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7(),
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            category: "work".to_string(),
            due_date: None,
            created_at: Utc::now(),
            progress: 0,
            tags: Vec::new(),
            estimated_hours: None,
        }
    }
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Draft data for creating a task. Tag and estimate inputs are carried raw
/// and parsed at creation: tags are comma-separated, the estimate is omitted
/// when blank or unparsable.
#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    pub description: String,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub tags: String,
    pub estimated_hours: String,
}

/// A partial field patch. `Option<Option<T>>` distinguishes "leave alone"
/// from "clear". Status and progress are applied verbatim here; the
/// synchronized transitions live on the repository.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub category: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub progress: Option<u8>,
    pub tags: Option<Vec<String>>,
    pub estimated_hours: Option<Option<f64>>,
}

/// Parses comma-separated tag input into a trimmed, de-duplicated list.
/// Empty entries are dropped; first occurrence wins on duplicates.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Parses an estimate input, yielding `None` when blank or unparsable.
/// Only positive, finite values count.
pub fn parse_estimate(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours > 0.0 => Some(hours),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    DueToday,
    Overdue,
    Reminder,
    Completion,
}

impl NotificationKind {
    /// Slug used when composing notification ids.
    pub fn slug(self) -> &'static str {
        match self {
            NotificationKind::DueToday => "due-today",
            NotificationKind::Overdue => "overdue",
            NotificationKind::Reminder => "reminder",
            NotificationKind::Completion => "completion",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A system-generated advisory record tied to a task's date-based condition.
/// `task_id` is a weak back-reference: the task may have been deleted since,
/// and every lookup tolerates a missing referent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub due_today: bool,
    pub overdue: bool,
    pub reminders: bool,
    pub completions: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            due_today: true,
            overdue: true,
            reminders: true,
            completions: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub auto_save: bool,
    pub show_completed_tasks: bool,
    pub default_category: String,
    pub default_priority: TaskPriority,
    pub compact_view: bool,
    pub show_progress_bars: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            show_completed_tasks: true,
            default_category: "work".to_string(),
            default_priority: TaskPriority::Medium,
            compact_view: false,
            show_progress_bars: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub join_date: DateTime<Utc>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Welcome User".to_string(),
            email: "user@example.com".to_string(),
            profile_picture: None,
            join_date: Utc::now(),
        }
    }
}
