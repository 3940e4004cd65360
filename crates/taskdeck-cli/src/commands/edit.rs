use crate::cli::EditCommand;
use crate::parser::parse_due_date;
use crate::util::resolve_task_id;
use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use taskdeck_core::models::{parse_estimate, parse_tags, UpdateTaskData};
use taskdeck_core::repository::Repository;

pub async fn edit_task(repo: &impl Repository, command: EditCommand) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;

    let due_date = if command.due_clear {
        Some(None)
    } else {
        match command.due.as_deref() {
            Some(raw) => Some(Some(parse_due_date(raw)?)),
            None => None,
        }
    };

    let estimated_hours = if command.estimate_clear {
        Some(None)
    } else {
        command.estimate.as_deref().map(parse_estimate)
    };

    let patch = UpdateTaskData {
        title: command.title,
        description: command.description,
        priority: command.priority,
        status: command.status,
        category: command.category,
        due_date,
        progress: command.progress,
        tags: command.tags.as_deref().map(parse_tags),
        estimated_hours,
    };

    let updated = repo.update_task(task_id, patch).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Updated task: {}",
        "✓".style(success_style),
        updated.title.bright_white().bold()
    );

    Ok(())
}
