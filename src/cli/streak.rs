//! Streak command implementations

use anyhow::Result;

use crate::session::SessionStore;
use crate::state::{KvMedium, StateStore};

pub fn show<M: KvMedium>(state: &StateStore<M>) -> Result<()> {
    let streak = state.streak();

    println!("{:<16} {:>6}", "Current Streak", streak.current_streak);
    println!("{:<16} {:>6}", "Longest Streak", streak.longest_streak);
    println!("{:<16} {:>6}", "Total Sessions", streak.total_sessions);
    println!("{:<16} {:>6}", "Plant Level", streak.plant_level);
    println!("{:<16} {:>6}", "Causes Helped", streak.causes_helped);

    Ok(())
}

/// Pull the remote streak counters into the local cache.
///
/// Counters the backend does not track (plant level, causes helped, total
/// sessions) are preserved from the cached record.
pub fn sync<M: KvMedium>(
    state: &StateStore<M>,
    sessions: &dyn SessionStore,
    user_id: &str,
) -> Result<()> {
    let Some(remote) = sessions.fetch_streak(user_id)? else {
        println!("No streak data for user '{}'.", user_id);
        return Ok(());
    };

    let mut cached = state.streak();
    cached.current_streak = remote.current_streak;
    cached.longest_streak = remote.longest_streak;
    state.save_streak(&cached);

    println!(
        "Synced streak for '{}': current {}, longest {}",
        user_id, cached.current_streak, cached.longest_streak
    );
    Ok(())
}
