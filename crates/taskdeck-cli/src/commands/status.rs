use crate::cli::{DoneCommand, ProgressCommand, StartCommand};
use crate::util::resolve_task_id;
use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use taskdeck_core::models::TaskStatus;
use taskdeck_core::repository::Repository;

pub async fn start_task(repo: &impl Repository, command: StartCommand) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;
    let task = repo.set_status(task_id, TaskStatus::InProgress).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Started task: {}",
        "✓".style(success_style),
        task.title.bright_white().bold()
    );
    Ok(())
}

pub async fn complete_task(repo: &impl Repository, command: DoneCommand) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;
    let task = repo.set_status(task_id, TaskStatus::Completed).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Completed task: {}",
        "✓".style(success_style),
        task.title.bright_white().bold()
    );
    Ok(())
}

pub async fn set_progress(repo: &impl Repository, command: ProgressCommand) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;
    let task = repo.set_progress(task_id, command.percent).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Progress for {}: {}% ({})",
        "✓".style(success_style),
        task.title.bright_white().bold(),
        task.progress,
        task.status
    );
    Ok(())
}
