use anyhow::Result;
use chrono::{Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};
use taskdeck_core::models::{TaskPriority, TaskStatus};
use taskdeck_core::query::SortBy;

/// Parses a due date from an ISO date or a human phrase like 'tomorrow'
/// or 'next friday'. Only the calendar date is kept.
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        return Ok(date);
    }
    parse_date_string(date_str, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse due date '{}': {}", date_str, e))
}

pub fn priority_from_arg(s: &str) -> Result<TaskPriority, String> {
    s.parse().map_err(|_| {
        format!("invalid priority '{s}' (expected one of: low, medium, high)")
    })
}

pub fn status_from_arg(s: &str) -> Result<TaskStatus, String> {
    s.parse().map_err(|_| {
        format!("invalid status '{s}' (expected one of: todo, in-progress, completed)")
    })
}

pub fn sort_from_arg(s: &str) -> Result<SortBy, String> {
    s.parse().map_err(|_| {
        format!("invalid sort order '{s}' (expected one of: due, priority, created, progress)")
    })
}
