//! Rule-based productivity suggestions.
//!
//! Each rule is a plain function over the task collection; the rule list is
//! fixed at compile time and evaluated in order, then the output is
//! stable-sorted by severity so equal-severity suggestions keep rule order.
//! Suggestions are ephemeral and never persisted.

use crate::models::{Severity, Task, TaskPriority, TaskStatus};
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Priority,
    Schedule,
    Breakdown,
    Reminder,
    Optimization,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Semantic key, unique per rule within one evaluation pass.
    pub key: &'static str,
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub action: Option<&'static str>,
    pub severity: Severity,
}

type Rule = fn(&[Task], NaiveDate) -> Option<Suggestion>;

fn is_open(task: &Task) -> bool {
    !task.is_completed()
}

fn high_priority_overdue(tasks: &[Task], today: NaiveDate) -> Option<Suggestion> {
    let count = tasks
        .iter()
        .filter(|t| {
            t.priority == TaskPriority::High
                && matches!(t.due_date, Some(due) if due < today)
                && is_open(t)
        })
        .count();
    (count > 0).then(|| Suggestion {
        key: "high-priority-overdue",
        kind: SuggestionKind::Priority,
        title: "High Priority Tasks Overdue".to_string(),
        description: format!(
            "You have {count} high-priority tasks that are overdue. Consider addressing these immediately."
        ),
        action: Some("Review overdue tasks"),
        severity: Severity::High,
    })
}

fn due_today(tasks: &[Task], today: NaiveDate) -> Option<Suggestion> {
    let count = tasks
        .iter()
        .filter(|t| t.due_date == Some(today) && is_open(t))
        .count();
    (count > 0).then(|| Suggestion {
        key: "due-today",
        kind: SuggestionKind::Reminder,
        title: "Tasks Due Today".to_string(),
        description: format!("You have {count} tasks due today. Plan your day accordingly."),
        action: Some("View today's tasks"),
        severity: Severity::Medium,
    })
}

fn break_down_large_tasks(tasks: &[Task], _today: NaiveDate) -> Option<Suggestion> {
    let any = tasks.iter().any(|t| {
        matches!(t.estimated_hours, Some(hours) if hours > 8.0) && is_open(t) && t.progress < 50
    });
    any.then(|| Suggestion {
        key: "break-down-large-tasks",
        kind: SuggestionKind::Breakdown,
        title: "Break Down Large Tasks".to_string(),
        description: "Consider breaking down tasks with 8+ hour estimates into smaller, manageable subtasks."
            .to_string(),
        action: Some("Review large tasks"),
        severity: Severity::Medium,
    })
}

fn too_many_in_progress(tasks: &[Task], _today: NaiveDate) -> Option<Suggestion> {
    let count = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    (count > 5).then(|| Suggestion {
        key: "too-many-in-progress",
        kind: SuggestionKind::Optimization,
        title: "Too Many Tasks In Progress".to_string(),
        description: format!(
            "You have {count} tasks in progress. Consider focusing on fewer tasks for better productivity."
        ),
        action: Some("Focus on key tasks"),
        severity: Severity::Medium,
    })
}

fn schedule_high_priority(tasks: &[Task], _today: NaiveDate) -> Option<Suggestion> {
    let count = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::High && t.due_date.is_none() && is_open(t))
        .count();
    (count > 0).then(|| Suggestion {
        key: "schedule-high-priority",
        kind: SuggestionKind::Schedule,
        title: "Schedule High Priority Tasks".to_string(),
        description: format!(
            "{count} high-priority tasks don't have due dates. Setting deadlines can improve completion rates."
        ),
        action: Some("Add due dates"),
        severity: Severity::Medium,
    })
}

fn completion_streak(tasks: &[Task], today: NaiveDate) -> Option<Suggestion> {
    // Keyed off creation date; the data model has no completion timestamp.
    let week_start = today - Duration::days(7);
    let count = tasks
        .iter()
        .filter(|t| t.is_completed() && t.created_at.date_naive() >= week_start)
        .count();
    (count >= 5).then(|| Suggestion {
        key: "completion-streak",
        kind: SuggestionKind::Optimization,
        title: "Great Productivity Streak!".to_string(),
        description: format!("You've completed {count} tasks this week. Keep up the excellent work!"),
        action: None,
        severity: Severity::Low,
    })
}

fn time_slot_recommendation(tasks: &[Task], _today: NaiveDate) -> Option<Suggestion> {
    let work = tasks.iter().any(|t| t.category == "work" && is_open(t));
    let personal = tasks.iter().any(|t| t.category == "personal" && is_open(t));
    (work && personal).then(|| Suggestion {
        key: "time-slot-recommendation",
        kind: SuggestionKind::Schedule,
        title: "Optimize Your Schedule".to_string(),
        description: "Consider tackling work tasks in the morning when focus is highest, and personal tasks in the evening."
            .to_string(),
        action: Some("Plan your day"),
        severity: Severity::Low,
    })
}

const RULES: [Rule; 7] = [
    high_priority_overdue,
    due_today,
    break_down_large_tasks,
    too_many_in_progress,
    schedule_high_priority,
    completion_streak,
    time_slot_recommendation,
];

/// Runs every rule and returns matches sorted by severity, highest first.
pub fn evaluate(tasks: &[Task], today: NaiveDate) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> =
        RULES.iter().filter_map(|rule| rule(tasks, today)).collect();
    suggestions.sort_by(|a, b| b.severity.cmp(&a.severity));
    suggestions
}
