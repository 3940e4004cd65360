//! CSV export and JSON backup/restore for the task collection.
//!
//! Both formats are rendered by hand; the CSV dialect is the minimal
//! RFC 4180 quoting (double quotes around fields that need them, embedded
//! quotes doubled).

use crate::error::CoreError;
use crate::models::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: &str =
    "Title,Description,Category,Priority,Status,Progress,Due Date,Created Date,Tags,Estimated Hours";

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the collection as a CSV document with the fixed 10-column header.
pub fn to_csv(tasks: &[Task]) -> String {
    let mut out = String::from(CSV_HEADER);
    for task in tasks {
        out.push('\n');
        let row = [
            csv_field(&task.title),
            csv_field(&task.description),
            csv_field(&task.category),
            task.priority.to_string(),
            task.status.to_string(),
            task.progress.to_string(),
            task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            task.created_at.to_rfc3339(),
            csv_field(&task.tags.join("; ")),
            task.estimated_hours
                .map(|h| h.to_string())
                .unwrap_or_default(),
        ];
        out.push_str(&row.join(","));
    }
    out
}

/// Backup document written by JSON export and consumed by import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub tasks: Vec<Task>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Renders the collection as a pretty-printed JSON backup document.
pub fn to_backup_json(tasks: &[Task], exported_at: DateTime<Utc>) -> Result<String, CoreError> {
    let document = BackupDocument {
        tasks: tasks.to_vec(),
        export_date: exported_at,
        version: "1.0".to_string(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parses a backup document, validating the shape before any task is
/// deserialized so a bad file is rejected with `InvalidImport` instead of
/// a generic serialization error. Progress values outside 0-100 are
/// clamped so a hand-edited backup cannot smuggle an out-of-range task
/// into the store.
pub fn parse_backup_json(text: &str) -> Result<Vec<Task>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| CoreError::InvalidImport(format!("not valid JSON: {e}")))?;
    let Some(tasks) = value.get("tasks") else {
        return Err(CoreError::InvalidImport(
            "missing 'tasks' field".to_string(),
        ));
    };
    if !tasks.is_array() {
        return Err(CoreError::InvalidImport(
            "'tasks' is not an array".to_string(),
        ));
    }
    let mut tasks: Vec<Task> = serde_json::from_value(tasks.clone())
        .map_err(|e| CoreError::InvalidImport(format!("malformed task entry: {e}")))?;
    for task in &mut tasks {
        task.progress = task.progress.min(100);
    }
    Ok(tasks)
}
