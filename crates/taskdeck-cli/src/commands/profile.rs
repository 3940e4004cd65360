use crate::cli::{ProfileEditCommand, ProfileSubcommand};
use anyhow::Result;
use chrono_humanize::Humanize;
use owo_colors::{OwoColorize, Style};
use taskdeck_core::models::UserProfile;
use taskdeck_core::store::{Store, USER_PROFILE_KEY};

pub async fn profile_command(store: &Store, command: ProfileSubcommand) -> Result<()> {
    match command {
        ProfileSubcommand::Show => show(store).await,
        ProfileSubcommand::Edit(cmd) => edit(store, cmd).await,
    }
}

async fn show(store: &Store) -> Result<()> {
    let profile: UserProfile = store.read(USER_PROFILE_KEY, UserProfile::default()).await;
    println!("Name:   {}", profile.name.bright_white().bold());
    println!("Email:  {}", profile.email);
    println!("Joined: {}", profile.join_date.humanize());
    Ok(())
}

async fn edit(store: &Store, command: ProfileEditCommand) -> Result<()> {
    let mut profile: UserProfile = store.read(USER_PROFILE_KEY, UserProfile::default()).await;

    if command.name.is_none() && command.email.is_none() {
        println!("Nothing to change. Use --name or --email.");
        return Ok(());
    }
    if let Some(name) = command.name {
        profile.name = name;
    }
    if let Some(email) = command.email {
        profile.email = email;
    }
    store.write(USER_PROFILE_KEY, &profile).await?;

    let success_style = Style::new().green().bold();
    println!("{} Profile updated.", "✓".style(success_style));
    Ok(())
}
