use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use taskdeck_core::repository::Repository;
use uuid::Uuid;

pub async fn delete_task(repo: &impl Repository, task_id: Uuid) -> Result<()> {
    repo.delete_task(task_id).await?;

    let success_style = Style::new().green().bold();
    println!("{} Task deleted.", "✓".style(success_style));
    Ok(())
}
