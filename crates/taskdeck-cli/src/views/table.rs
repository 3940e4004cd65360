use chrono::{Local, NaiveDate, TimeZone, Utc};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use taskdeck_core::models::{
    category_info, AppSettings, Notification, Severity, Task, TaskPriority, TaskStatus,
};
use taskdeck_core::suggestions::Suggestion;

fn progress_bar(percent: u8) -> String {
    let filled = ((percent as usize) / 10).min(10);
    format!("[{}{}] {percent}%", "#".repeat(filled), "-".repeat(10 - filled))
}

fn due_cell(task: &Task, today: NaiveDate) -> Cell {
    let Some(due) = task.due_date else {
        return Cell::new("None");
    };
    // Humanize relative to local midnight so 'in 2 days' lines up with
    // calendar days.
    let due_text = match Local.from_local_datetime(&due.and_hms_opt(0, 0, 0).unwrap_or_default()) {
        chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc).humanize(),
        _ => due.to_string(),
    };
    if task.is_completed() {
        Cell::new(due_text)
    } else if due < today {
        Cell::new(due_text).fg(Color::Red)
    } else if due == today {
        Cell::new(due_text).fg(Color::Yellow)
    } else {
        Cell::new(due_text)
    }
}

pub fn display_tasks(tasks: &[Task], settings: &AppSettings, today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    let mut header = vec!["ID", "Title", "Status", "Priority"];
    if settings.show_progress_bars {
        header.push("Progress");
    }
    header.extend(["Due Date", "Category", "Tags"]);
    table.set_header(header);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id.to_string()[..8]));

        let mut title_cell = Cell::new(&task.title);
        match task.status {
            TaskStatus::Completed => {
                title_cell = title_cell
                    .add_attribute(Attribute::CrossedOut)
                    .fg(Color::DarkGrey);
            }
            TaskStatus::Todo | TaskStatus::InProgress => {
                title_cell = match task.priority {
                    TaskPriority::High => {
                        title_cell.fg(Color::Red).add_attribute(Attribute::Bold)
                    }
                    TaskPriority::Medium => title_cell.fg(Color::Yellow),
                    TaskPriority::Low => title_cell.fg(Color::Green),
                };
            }
        }
        row.add_cell(title_cell);

        let mut status_cell = Cell::new(task.status.to_string());
        status_cell = match task.status {
            TaskStatus::Completed => status_cell.fg(Color::Green),
            TaskStatus::InProgress => status_cell.fg(Color::Cyan),
            TaskStatus::Todo => status_cell,
        };
        row.add_cell(status_cell);

        row.add_cell(Cell::new(task.priority.to_string()));
        if settings.show_progress_bars {
            row.add_cell(Cell::new(progress_bar(task.progress)));
        }
        row.add_cell(due_cell(task, today));
        row.add_cell(Cell::new(category_info(&task.category).label));
        row.add_cell(Cell::new(if task.tags.is_empty() {
            "None".to_string()
        } else {
            task.tags.join(", ")
        }));
        table.add_row(row);
    }

    println!("{table}");
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.to_string());
    match severity {
        Severity::High => cell.fg(Color::Red),
        Severity::Medium => cell.fg(Color::Yellow),
        Severity::Low => cell.fg(Color::Green),
    }
}

pub fn display_notifications(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("No notifications.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Message", "Severity", "When", "Read"]);

    for notification in notifications {
        let mut row = Row::new();
        row.add_cell(Cell::new(&notification.id));

        let mut title_cell = Cell::new(&notification.title);
        if !notification.read {
            title_cell = title_cell.add_attribute(Attribute::Bold);
        }
        row.add_cell(title_cell);
        row.add_cell(Cell::new(&notification.message));
        row.add_cell(severity_cell(notification.severity));
        row.add_cell(Cell::new(notification.timestamp.humanize()));
        row.add_cell(Cell::new(if notification.read { "yes" } else { "no" }));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("All caught up! No suggestions at the moment.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Severity", "Suggestion", "Details", "Action"]);

    for suggestion in suggestions {
        let mut row = Row::new();
        row.add_cell(severity_cell(suggestion.severity));
        row.add_cell(Cell::new(&suggestion.title).add_attribute(Attribute::Bold));
        row.add_cell(Cell::new(&suggestion.description));
        row.add_cell(Cell::new(suggestion.action.unwrap_or("-")));
        table.add_row(row);
    }

    println!("{table}");
}
