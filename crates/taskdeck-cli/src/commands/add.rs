use crate::cli::AddCommand;
use crate::parser::parse_due_date;
use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use taskdeck_core::models::NewTaskData;
use taskdeck_core::repository::Repository;

pub async fn add_task(repo: &impl Repository, command: AddCommand) -> Result<()> {
    let due_date = command.due.as_deref().map(parse_due_date).transpose()?;

    let new_task_data = NewTaskData {
        title: command.title,
        description: command.description.unwrap_or_default(),
        priority: command.priority,
        category: command.category,
        due_date,
        tags: command.tags,
        estimated_hours: command.estimate,
    };

    let added_task = repo.add_task(new_task_data).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    let subtle_style = Style::new().bright_black();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        added_task.title.bright_white().bold()
    );
    println!(
        "  {} Task ID: {}",
        "→".style(info_style),
        added_task.id.to_string().yellow()
    );
    if let Some(due) = added_task.due_date {
        println!("  {} Due: {}", "→".style(info_style), due.to_string().cyan());
    }

    println!("\n{} Quick actions:", "💡".style(subtle_style));
    println!(
        "   {} Mark complete: taskdeck done {}",
        "•".style(subtle_style),
        added_task.id.to_string().yellow()
    );
    println!(
        "   {} Edit task: taskdeck edit {}",
        "•".style(subtle_style),
        added_task.id.to_string().yellow()
    );

    Ok(())
}
