use crate::cli::{NotifyListCommand, NotifySettingsCommand, NotifySubcommand};
use crate::views::table::display_notifications;
use anyhow::Result;
use chrono::Utc;
use owo_colors::{OwoColorize, Style};
use taskdeck_core::models::{Notification, NotificationSettings};
use taskdeck_core::notifications;
use taskdeck_core::store::{Store, NOTIFICATIONS_KEY, NOTIFICATION_SETTINGS_KEY};

pub async fn notify_command(store: &Store, command: NotifySubcommand) -> Result<()> {
    match command {
        NotifySubcommand::List(cmd) => list(store, cmd).await,
        NotifySubcommand::Read(cmd) => {
            notifications::mark_read(store, &cmd.id).await?;
            println!("Notification marked as read.");
            Ok(())
        }
        NotifySubcommand::ReadAll => {
            let count = notifications::mark_all_read(store).await?;
            println!("Marked {count} notifications as read.");
            Ok(())
        }
        NotifySubcommand::Delete(cmd) => {
            notifications::remove(store, &cmd.id).await?;
            println!("Notification deleted.");
            Ok(())
        }
        NotifySubcommand::Clear => {
            let count = notifications::clear(store).await?;
            println!("Cleared {count} notifications.");
            Ok(())
        }
        NotifySubcommand::Settings(cmd) => settings(store, cmd).await,
    }
}

async fn list(store: &Store, command: NotifyListCommand) -> Result<()> {
    let fresh = notifications::refresh(store, Utc::now()).await?;
    if !fresh.is_empty() {
        let info_style = Style::new().blue();
        println!(
            "{} {} new notification{}",
            "→".style(info_style),
            fresh.len(),
            if fresh.len() == 1 { "" } else { "s" }
        );
    }

    let mut log: Vec<Notification> = store.read(NOTIFICATIONS_KEY, Vec::new()).await;
    if command.unread {
        log.retain(|n| !n.read);
    }
    // Newest first.
    log.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    display_notifications(&log);
    Ok(())
}

async fn settings(store: &Store, command: NotifySettingsCommand) -> Result<()> {
    let mut settings: NotificationSettings = store
        .read(NOTIFICATION_SETTINGS_KEY, NotificationSettings::default())
        .await;

    let changed = command.enabled.is_some()
        || command.due_today.is_some()
        || command.overdue.is_some()
        || command.reminders.is_some()
        || command.completions.is_some();

    if let Some(enabled) = command.enabled {
        settings.enabled = enabled;
    }
    if let Some(due_today) = command.due_today {
        settings.due_today = due_today;
    }
    if let Some(overdue) = command.overdue {
        settings.overdue = overdue;
    }
    if let Some(reminders) = command.reminders {
        settings.reminders = reminders;
    }
    if let Some(completions) = command.completions {
        settings.completions = completions;
    }

    if changed {
        store.write(NOTIFICATION_SETTINGS_KEY, &settings).await?;
        let success_style = Style::new().green().bold();
        println!("{} Notification settings updated.", "✓".style(success_style));
    }

    println!("  enabled: {}", settings.enabled);
    println!("  due-today: {}", settings.due_today);
    println!("  overdue: {}", settings.overdue);
    println!("  reminders: {}", settings.reminders);
    println!("  completions: {}", settings.completions);
    Ok(())
}
