use crate::cli::PrefsCommand;
use anyhow::{anyhow, Result};
use owo_colors::{OwoColorize, Style};
use taskdeck_core::error::CoreError;
use taskdeck_core::models::{is_known_category, AppSettings, TASK_CATEGORIES};
use taskdeck_core::store::{Store, APP_SETTINGS_KEY};

pub async fn prefs_command(store: &Store, command: PrefsCommand) -> Result<()> {
    if command.reset {
        store.remove(APP_SETTINGS_KEY).await?;
        let success_style = Style::new().green().bold();
        println!("{} Preferences reset to defaults.", "✓".style(success_style));
        print_settings(&AppSettings::default());
        return Ok(());
    }

    let mut settings: AppSettings = store.read(APP_SETTINGS_KEY, AppSettings::default()).await;

    let changed = command.auto_save.is_some()
        || command.show_completed.is_some()
        || command.default_category.is_some()
        || command.default_priority.is_some()
        || command.compact_view.is_some()
        || command.show_progress_bars.is_some();

    if let Some(auto_save) = command.auto_save {
        settings.auto_save = auto_save;
    }
    if let Some(show_completed) = command.show_completed {
        settings.show_completed_tasks = show_completed;
    }
    if let Some(category) = command.default_category {
        if !is_known_category(&category) {
            let known: Vec<&str> = TASK_CATEGORIES.iter().map(|c| c.id).collect();
            return Err(anyhow!(CoreError::InvalidInput(format!(
                "unknown category '{}' (expected one of: {})",
                category,
                known.join(", ")
            ))));
        }
        settings.default_category = category;
    }
    if let Some(priority) = command.default_priority {
        settings.default_priority = priority;
    }
    if let Some(compact_view) = command.compact_view {
        settings.compact_view = compact_view;
    }
    if let Some(show_progress_bars) = command.show_progress_bars {
        settings.show_progress_bars = show_progress_bars;
    }

    if changed {
        store.write(APP_SETTINGS_KEY, &settings).await?;
        let success_style = Style::new().green().bold();
        println!("{} Preferences updated.", "✓".style(success_style));
    }

    print_settings(&settings);
    Ok(())
}

fn print_settings(settings: &AppSettings) {
    println!("  auto-save: {}", settings.auto_save);
    println!("  show-completed: {}", settings.show_completed_tasks);
    println!("  default-category: {}", settings.default_category);
    println!("  default-priority: {}", settings.default_priority);
    println!("  compact-view: {}", settings.compact_view);
    println!("  show-progress-bars: {}", settings.show_progress_bars);
}
