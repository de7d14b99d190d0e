//! Log command implementation
//!
//! Records a completed activity session and bumps the cached session
//! counter. Unrecognized activity tags are accepted; they show up in the
//! dashboard totals but not in any category bucket.

use anyhow::Result;

use crate::session::SessionStore;
use crate::state::{KvMedium, StateStore};
use crate::stats::ActivityKind;

pub fn run<M: KvMedium>(
    state: &StateStore<M>,
    sessions: &dyn SessionStore,
    user_id: &str,
    activity: &str,
    minutes: Option<f64>,
) -> Result<()> {
    if ActivityKind::parse(activity).is_none() {
        println!(
            "Note: '{}' is not a recognized activity; it will count toward totals only.",
            activity
        );
    }

    let id = sessions.record_session(user_id, activity, minutes)?;

    let mut streak = state.streak();
    streak.total_sessions += 1;
    state.save_streak(&streak);

    match minutes {
        Some(m) => println!("Logged {} session ({} min) as {}", activity, m, &id[..8]),
        None => println!("Logged {} session as {}", activity, &id[..8]),
    }

    Ok(())
}
