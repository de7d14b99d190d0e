//! Preferences command implementations

use anyhow::{bail, Result};

use crate::state::{KvMedium, StateStore};

pub fn show<M: KvMedium>(state: &StateStore<M>) -> Result<()> {
    let prefs = state.preferences();

    println!(
        "{:<16} {}",
        "Display Name",
        prefs.display_name.as_deref().unwrap_or("-")
    );
    println!(
        "{:<16} {}",
        "Reminder Hour",
        prefs
            .reminder_hour
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    Ok(())
}

/// Update preference fields, leaving unspecified ones as they are
pub fn set<M: KvMedium>(
    state: &StateStore<M>,
    name: Option<String>,
    reminder_hour: Option<i64>,
) -> Result<()> {
    if name.is_none() && reminder_hour.is_none() {
        println!("Nothing to update. Pass --name and/or --reminder-hour.");
        return Ok(());
    }

    if let Some(hour) = reminder_hour {
        if !(0..=23).contains(&hour) {
            bail!("reminder hour must be between 0 and 23, got {}", hour);
        }
    }

    let mut prefs = state.preferences();
    if let Some(name) = name {
        prefs.display_name = Some(name);
    }
    if let Some(hour) = reminder_hour {
        prefs.reminder_hour = Some(hour);
    }
    state.save_preferences(&prefs);

    println!("Preferences updated.");
    Ok(())
}
