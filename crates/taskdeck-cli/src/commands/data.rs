use crate::cli::{ExportCommand, ExportFormat, ImportCommand};
use anyhow::Result;
use chrono::{Local, Utc};
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use std::path::PathBuf;
use taskdeck_core::export::{parse_backup_json, to_backup_json, to_csv};
use taskdeck_core::repository::Repository;

pub async fn export_tasks(repo: &impl Repository, command: ExportCommand) -> Result<()> {
    let tasks = repo.all_tasks().await?;
    let date = Local::now().date_naive();

    let (path, content) = match command.format {
        ExportFormat::Csv => (
            command
                .output
                .unwrap_or_else(|| PathBuf::from(format!("tasks-export-{date}.csv"))),
            to_csv(&tasks),
        ),
        ExportFormat::Json => (
            command
                .output
                .unwrap_or_else(|| PathBuf::from(format!("tasks-backup-{date}.json"))),
            to_backup_json(&tasks, Utc::now())?,
        ),
    };

    tokio::fs::write(&path, content).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Exported {} tasks to {}",
        "✓".style(success_style),
        tasks.len(),
        path.display().to_string().cyan()
    );
    Ok(())
}

pub async fn import_tasks(repo: &impl Repository, command: ImportCommand) -> Result<()> {
    let text = tokio::fs::read_to_string(&command.file).await?;
    let imported = parse_backup_json(&text)?;

    let existing = repo.all_tasks().await?;
    if !existing.is_empty() && !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "This will replace your {} existing tasks with {} imported tasks. Continue?",
                existing.len(),
                imported.len()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Import cancelled.");
            return Ok(());
        }
    }

    let count = repo.replace_all_tasks(imported).await?;

    let success_style = Style::new().green().bold();
    println!("{} Imported {} tasks.", "✓".style(success_style), count);
    Ok(())
}
