use crate::views::table::display_suggestions;
use anyhow::Result;
use chrono::Local;
use taskdeck_core::repository::Repository;
use taskdeck_core::suggestions::evaluate;

pub async fn show_suggestions(repo: &impl Repository) -> Result<()> {
    let tasks = repo.all_tasks().await?;
    let suggestions = evaluate(&tasks, Local::now().date_naive());
    display_suggestions(&suggestions);
    Ok(())
}
