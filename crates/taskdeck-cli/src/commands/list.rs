use crate::cli::ListCommand;
use crate::views::table::display_tasks;
use anyhow::Result;
use chrono::Local;
use taskdeck_core::models::{AppSettings, TaskStatus};
use taskdeck_core::query::TaskQuery;
use taskdeck_core::repository::{JsonStoreRepository, Repository};
use taskdeck_core::store::APP_SETTINGS_KEY;

pub async fn list_tasks(repo: &JsonStoreRepository, command: ListCommand) -> Result<()> {
    let settings: AppSettings = repo
        .store()
        .read(APP_SETTINGS_KEY, AppSettings::default())
        .await;

    let query = TaskQuery {
        search: command.search,
        category: command.category,
        status: command.status,
        priority: command.priority,
        sort: command.sort,
    };

    let mut tasks = repo.list_tasks(&query).await?;

    // The hide-completed preference only applies when no explicit status
    // filter or --all override is in play.
    if !settings.show_completed_tasks && !command.all && query.status.is_none() {
        tasks.retain(|t| t.status != TaskStatus::Completed);
    }

    display_tasks(&tasks, &settings, Local::now().date_naive());

    Ok(())
}
