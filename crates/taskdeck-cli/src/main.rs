use clap::Parser;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use std::sync::Arc;
use taskdeck_core::error::CoreError;
use taskdeck_core::repository::{JsonStoreRepository, Repository};
use taskdeck_core::store::Store;
use util::resolve_task_id;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_default();
    let store = match Store::open(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = JsonStoreRepository::new(Arc::clone(&store));

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command).await,
        cli::Commands::List(command) => commands::list::list_tasks(&repository, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&repository, command).await,
        cli::Commands::Start(command) => commands::status::start_task(&repository, command).await,
        cli::Commands::Done(command) => {
            commands::status::complete_task(&repository, command).await
        }
        cli::Commands::Progress(command) => {
            commands::status::set_progress(&repository, command).await
        }
        cli::Commands::Delete(command) => {
            let task_id = match resolve_task_id(&repository, &command.id).await {
                Ok(id) => id,
                Err(e) => {
                    handle_error(e);
                    std::process::exit(1);
                }
            };
            let task = match repository.find_task_by_id(task_id).await {
                Ok(Some(t)) => t,
                Ok(None) => {
                    let error_style = Style::new().red().bold();
                    eprintln!(
                        "{} Task with ID '{}' not found.",
                        "Error:".style(error_style),
                        task_id
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    handle_error(e.into());
                    std::process::exit(1);
                }
            };

            if !command.force {
                let confirmation = Confirm::new()
                    .with_prompt(format!(
                        "Are you sure you want to delete task '{}'?",
                        task.title
                    ))
                    .default(false)
                    .interact()
                    .unwrap_or(false);

                if !confirmation {
                    println!("Deletion cancelled.");
                    return;
                }
            }
            commands::delete::delete_task(&repository, task_id).await
        }
        cli::Commands::Stats(command) => commands::stats::show_stats(&repository, command).await,
        cli::Commands::Notify(command) => {
            commands::notify::notify_command(&store, command.command).await
        }
        cli::Commands::Suggest => commands::suggest::show_suggestions(&repository).await,
        cli::Commands::Export(command) => commands::data::export_tasks(&repository, command).await,
        cli::Commands::Import(command) => commands::data::import_tasks(&repository, command).await,
        cli::Commands::Profile(command) => {
            commands::profile::profile_command(&store, command.command).await
        }
        cli::Commands::Prefs(command) => commands::prefs::prefs_command(&store, command).await,
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(tasks) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, title) in tasks {
                    eprintln!("  {} ({})", id.yellow(), title);
                }
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidImport(s) => {
                eprintln!("{} Invalid import document: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
