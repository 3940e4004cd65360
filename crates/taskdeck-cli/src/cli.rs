use crate::parser::{priority_from_arg, sort_from_arg, status_from_arg};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskdeck_core::models::{TaskPriority, TaskStatus};
use taskdeck_core::query::SortBy;

/// A personal task-tracking dashboard for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List tasks
    List(ListCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as in progress
    Start(StartCommand),
    /// Mark a task as completed
    Done(DoneCommand),
    /// Set a task's progress percentage
    Progress(ProgressCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Show analytics and productivity statistics
    Stats(StatsCommand),
    /// Manage notifications
    Notify(NotifyCommand),
    /// Show productivity suggestions
    Suggest,
    /// Export tasks to CSV or JSON
    Export(ExportCommand),
    /// Import tasks from a JSON backup
    Import(ImportCommand),
    /// Show or edit the user profile
    Profile(ProfileCommand),
    /// Show or change application preferences
    Prefs(PrefsCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The description of the task
    #[clap(short, long)]
    pub description: Option<String>,
    /// The due date of the task (e.g. '2026-09-01', 'tomorrow', 'next friday')
    #[clap(long)]
    pub due: Option<String>,
    /// The category of the task
    #[clap(short, long)]
    pub category: Option<String>,
    /// The priority of the task (low, medium, high)
    #[clap(long, value_parser = priority_from_arg)]
    pub priority: Option<TaskPriority>,
    /// Comma-separated tags (e.g. 'work, urgent')
    #[clap(short, long, default_value = "")]
    pub tags: String,
    /// Estimated hours to complete
    #[clap(short, long, default_value = "")]
    pub estimate: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Search term matched against title, description, and tags
    #[clap(short, long)]
    pub search: Option<String>,
    /// Filter by category
    #[clap(short, long)]
    pub category: Option<String>,
    /// Filter by status (todo, in-progress, completed)
    #[clap(long, value_parser = status_from_arg)]
    pub status: Option<TaskStatus>,
    /// Filter by priority (low, medium, high)
    #[clap(long, value_parser = priority_from_arg)]
    pub priority: Option<TaskPriority>,
    /// Sort order (due, priority, created, progress)
    #[clap(long, value_parser = sort_from_arg, default_value = "due")]
    pub sort: SortBy,
    /// Include completed tasks even when preferences hide them
    #[clap(short, long)]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, value_parser = priority_from_arg)]
    pub priority: Option<TaskPriority>,

    #[arg(long, value_parser = status_from_arg)]
    pub status: Option<TaskStatus>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub due: Option<String>,
    #[arg(long, conflicts_with = "due")]
    pub due_clear: bool,

    /// Progress percentage (0-100)
    #[arg(long)]
    pub progress: Option<u8>,

    /// Replace the tag list (comma-separated)
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub estimate: Option<String>,
    #[arg(long, conflicts_with = "estimate")]
    pub estimate_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct StartCommand {
    /// The ID of the task to start
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as completed
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ProgressCommand {
    /// The ID of the task
    pub id: String,
    /// Progress percentage (0-100)
    pub percent: u8,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsCommand {
    /// Show per-category and per-priority breakdowns
    #[clap(long)]
    pub detailed: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NotifyCommand {
    #[command(subcommand)]
    pub command: NotifySubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NotifySubcommand {
    /// Refresh and list notifications
    List(NotifyListCommand),
    /// Mark a notification as read
    Read(NotifyReadCommand),
    /// Mark all notifications as read
    ReadAll,
    /// Delete a notification
    Delete(NotifyDeleteCommand),
    /// Clear all notifications
    Clear,
    /// Show or change notification settings
    Settings(NotifySettingsCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct NotifyListCommand {
    /// Show only unread notifications
    #[clap(short, long)]
    pub unread: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NotifyReadCommand {
    /// The ID of the notification
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct NotifyDeleteCommand {
    /// The ID of the notification
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct NotifySettingsCommand {
    /// Master switch for all notifications
    #[clap(long)]
    pub enabled: Option<bool>,
    /// Notify about tasks due today
    #[clap(long)]
    pub due_today: Option<bool>,
    /// Notify about overdue tasks
    #[clap(long)]
    pub overdue: Option<bool>,
    /// Remind about tasks due in 3 days
    #[clap(long)]
    pub reminders: Option<bool>,
    /// Celebrate completions
    #[clap(long)]
    pub completions: Option<bool>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportCommand {
    /// Output format
    #[clap(value_enum)]
    pub format: ExportFormat,
    /// Output path (defaults to tasks-export-<date>.csv / tasks-backup-<date>.json)
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ImportCommand {
    /// Path to a JSON backup file
    pub file: PathBuf,
    /// Replace existing tasks without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileSubcommand {
    /// Show the user profile
    Show,
    /// Edit the user profile
    Edit(ProfileEditCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileEditCommand {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PrefsCommand {
    /// Automatically persist every change
    #[clap(long)]
    pub auto_save: Option<bool>,
    /// Show completed tasks in listings
    #[clap(long)]
    pub show_completed: Option<bool>,
    /// Default category for new tasks
    #[clap(long)]
    pub default_category: Option<String>,
    /// Default priority for new tasks (low, medium, high)
    #[clap(long, value_parser = priority_from_arg)]
    pub default_priority: Option<TaskPriority>,
    /// Compact listing layout
    #[clap(long)]
    pub compact_view: Option<bool>,
    /// Show progress bars in listings
    #[clap(long)]
    pub show_progress_bars: Option<bool>,
    /// Discard all stored preferences and return to the defaults
    #[clap(long, exclusive = true)]
    pub reset: bool,
}
