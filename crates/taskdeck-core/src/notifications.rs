//! Date-based notification generation and the persisted notification log.
//!
//! `generate` is pure; `refresh` wires it to the store, appending all new
//! notifications in a single batch write. At most one notification of a
//! given type is produced per task per calendar day, enforced by scanning
//! the existing log before insert.

use crate::error::CoreError;
use crate::models::{
    Notification, NotificationKind, NotificationSettings, Severity, Task, TaskPriority,
};
use crate::store::{Store, NOTIFICATIONS_KEY, NOTIFICATION_SETTINGS_KEY, TASKS_KEY};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

fn notification_id(kind: NotificationKind, task_id: Uuid, now: DateTime<Utc>) -> String {
    // Embeds type, task, and instant; collision avoidance only, never used
    // as a stable key.
    format!("{}-{}-{}", kind.slug(), task_id, now.timestamp_millis())
}

fn already_notified(
    existing: &[Notification],
    kind: NotificationKind,
    task: &Task,
    today: NaiveDate,
) -> bool {
    existing.iter().any(|n| {
        n.kind == kind && n.task_id == Some(task.id) && n.timestamp.date_naive() == today
    })
}

/// Scans `tasks` against `settings` and returns the notifications that are
/// due but not yet present in `existing`. Pure: nothing is persisted here.
pub fn generate(
    tasks: &[Task],
    existing: &[Notification],
    settings: &NotificationSettings,
    now: DateTime<Utc>,
) -> Vec<Notification> {
    if !settings.enabled {
        return Vec::new();
    }

    let today = now.date_naive();
    let mut fresh = Vec::new();

    if settings.due_today {
        for task in tasks
            .iter()
            .filter(|t| t.due_date == Some(today) && !t.is_completed())
        {
            if already_notified(existing, NotificationKind::DueToday, task, today) {
                continue;
            }
            fresh.push(Notification {
                id: notification_id(NotificationKind::DueToday, task.id, now),
                kind: NotificationKind::DueToday,
                title: "Task Due Today".to_string(),
                message: format!("\"{}\" is due today", task.title),
                task_id: Some(task.id),
                timestamp: now,
                read: false,
                severity: if task.priority == TaskPriority::High {
                    Severity::High
                } else {
                    Severity::Medium
                },
            });
        }
    }

    if settings.overdue {
        for task in tasks.iter().filter(
            |t| matches!(t.due_date, Some(due) if due < today) && !t.is_completed(),
        ) {
            if already_notified(existing, NotificationKind::Overdue, task, today) {
                continue;
            }
            let days = task
                .due_date
                .map(|due| (today - due).num_days())
                .unwrap_or(0);
            fresh.push(Notification {
                id: notification_id(NotificationKind::Overdue, task.id, now),
                kind: NotificationKind::Overdue,
                title: "Task Overdue".to_string(),
                message: format!(
                    "\"{}\" is {} day{} overdue",
                    task.title,
                    days,
                    if days == 1 { "" } else { "s" }
                ),
                task_id: Some(task.id),
                timestamp: now,
                read: false,
                severity: Severity::High,
            });
        }
    }

    if settings.reminders {
        for task in tasks.iter().filter(|t| {
            matches!(t.due_date, Some(due) if (due - today).num_days() == 3) && !t.is_completed()
        }) {
            if already_notified(existing, NotificationKind::Reminder, task, today) {
                continue;
            }
            fresh.push(Notification {
                id: notification_id(NotificationKind::Reminder, task.id, now),
                kind: NotificationKind::Reminder,
                title: "Upcoming Deadline".to_string(),
                message: format!("\"{}\" is due in 3 days", task.title),
                task_id: Some(task.id),
                timestamp: now,
                read: false,
                severity: Severity::Medium,
            });
        }
    }

    fresh
}

/// Re-runs the scan against the store and appends any new notifications to
/// the log in one write. Returns the newly appended notifications.
pub async fn refresh(store: &Store, now: DateTime<Utc>) -> Result<Vec<Notification>, CoreError> {
    let settings = store
        .read(NOTIFICATION_SETTINGS_KEY, NotificationSettings::default())
        .await;
    let tasks: Vec<Task> = store.read(TASKS_KEY, Vec::new()).await;
    let mut log: Vec<Notification> = store.read(NOTIFICATIONS_KEY, Vec::new()).await;

    let fresh = generate(&tasks, &log, &settings, now);
    if !fresh.is_empty() {
        log.extend(fresh.iter().cloned());
        store.write(NOTIFICATIONS_KEY, &log).await?;
    }
    Ok(fresh)
}

/// Marks one notification read. Unknown ids are tolerated as a no-op.
pub async fn mark_read(store: &Store, id: &str) -> Result<(), CoreError> {
    let mut log: Vec<Notification> = store.read(NOTIFICATIONS_KEY, Vec::new()).await;
    let mut changed = false;
    for notification in log.iter_mut().filter(|n| n.id == id) {
        if !notification.read {
            notification.read = true;
            changed = true;
        }
    }
    if changed {
        store.write(NOTIFICATIONS_KEY, &log).await?;
    }
    Ok(())
}

/// Marks every notification read, returning how many changed.
pub async fn mark_all_read(store: &Store) -> Result<usize, CoreError> {
    let mut log: Vec<Notification> = store.read(NOTIFICATIONS_KEY, Vec::new()).await;
    let mut changed = 0;
    for notification in log.iter_mut().filter(|n| !n.read) {
        notification.read = true;
        changed += 1;
    }
    if changed > 0 {
        store.write(NOTIFICATIONS_KEY, &log).await?;
    }
    Ok(changed)
}

/// Deletes one notification. Unknown ids are tolerated as a no-op.
pub async fn remove(store: &Store, id: &str) -> Result<(), CoreError> {
    let mut log: Vec<Notification> = store.read(NOTIFICATIONS_KEY, Vec::new()).await;
    let before = log.len();
    log.retain(|n| n.id != id);
    if log.len() != before {
        store.write(NOTIFICATIONS_KEY, &log).await?;
    }
    Ok(())
}

/// Clears the entire log, returning how many notifications were dropped.
pub async fn clear(store: &Store) -> Result<usize, CoreError> {
    let log: Vec<Notification> = store.read(NOTIFICATIONS_KEY, Vec::new()).await;
    let count = log.len();
    if count > 0 {
        store
            .write(NOTIFICATIONS_KEY, &Vec::<Notification>::new())
            .await?;
    }
    Ok(count)
}
