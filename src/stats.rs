//! Dashboard statistics aggregation
//!
//! Pure reduction of activity-session rows into the summary the dashboard
//! renders. Rows are owned by the remote session store and read-only here;
//! the aggregate is recomputed on every fetch and never persisted.

use serde::{Deserialize, Serialize};

/// The recognized activity categories.
///
/// Rows carrying any other tag still count toward session/minute totals
/// but land in no category bucket, so new categories can ship server-side
/// before this list catches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Meditation,
    Music,
    Sounds,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Meditation,
        ActivityKind::Music,
        ActivityKind::Sounds,
    ];

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "meditation" => Some(Self::Meditation),
            "music" => Some(Self::Music),
            "sounds" => Some(Self::Sounds),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meditation => "meditation",
            Self::Music => "music",
            Self::Sounds => "sounds",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Meditation => "Meditation",
            Self::Music => "Music",
            Self::Sounds => "Sounds",
        }
    }
}

/// One completed activity, as returned by the session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySession {
    pub activity_type: String,
    pub duration_minutes: Option<f64>,
}

/// Streak counters as returned by the session store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: i64,
    pub longest_streak: i64,
}

/// Aggregated dashboard summary, computed fresh each render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub current_streak: i64,
    pub longest_streak: i64,
    pub total_sessions: i64,
    pub total_minutes: f64,
    pub meditation_sessions: i64,
    pub music_sessions: i64,
    pub sound_sessions: i64,
}

impl DashboardStats {
    pub fn category_count(&self, kind: ActivityKind) -> i64 {
        match kind {
            ActivityKind::Meditation => self.meditation_sessions,
            ActivityKind::Music => self.music_sessions,
            ActivityKind::Sounds => self.sound_sessions,
        }
    }
}

/// Reduce session rows and an optional streak summary into dashboard stats.
///
/// `total_sessions` is the row count, not the sum of category counts, so
/// unrecognized activity tags are still represented in the totals. Each
/// duration term is clamped to a finite non-negative value before
/// accumulation; the sum is never NaN.
pub fn aggregate(rows: &[ActivitySession], streak: Option<&StreakSummary>) -> DashboardStats {
    let mut stats = DashboardStats {
        total_sessions: rows.len() as i64,
        ..Default::default()
    };

    if let Some(streak) = streak {
        stats.current_streak = streak.current_streak;
        stats.longest_streak = streak.longest_streak;
    }

    for row in rows {
        match ActivityKind::parse(&row.activity_type) {
            Some(ActivityKind::Meditation) => stats.meditation_sessions += 1,
            Some(ActivityKind::Music) => stats.music_sessions += 1,
            Some(ActivityKind::Sounds) => stats.sound_sessions += 1,
            None => {}
        }

        let minutes = row.duration_minutes.unwrap_or(0.0);
        if minutes.is_finite() && minutes > 0.0 {
            stats.total_minutes += minutes;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(kind: &str, minutes: Option<f64>) -> ActivitySession {
        ActivitySession {
            activity_type: kind.to_string(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_empty_rows_yield_zeroed_stats() {
        let stats = aggregate(&[], None);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_worked_example() {
        let rows = vec![
            session("meditation", Some(10.0)),
            session("music", Some(5.0)),
            session("meditation", Some(0.0)),
        ];
        let streak = StreakSummary {
            current_streak: 3,
            longest_streak: 7,
        };

        let stats = aggregate(&rows, Some(&streak));
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 7);
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_minutes, 15.0);
        assert_eq!(stats.meditation_sessions, 2);
        assert_eq!(stats.music_sessions, 1);
        assert_eq!(stats.sound_sessions, 0);
    }

    #[test]
    fn test_unrecognized_tag_counts_toward_totals_only() {
        let rows = vec![
            session("meditation", Some(10.0)),
            session("breathwork", Some(20.0)),
        ];

        let stats = aggregate(&rows, None);
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_minutes, 30.0);
        let categorized: i64 = ActivityKind::ALL
            .iter()
            .map(|k| stats.category_count(*k))
            .sum();
        assert_eq!(categorized, 1);
    }

    #[test]
    fn test_category_counts_plus_unrecognized_equals_total() {
        let rows = vec![
            session("meditation", Some(1.0)),
            session("music", None),
            session("sounds", Some(3.0)),
            session("walking", Some(4.0)),
            session("meditation", None),
        ];

        let stats = aggregate(&rows, None);
        let categorized: i64 = ActivityKind::ALL
            .iter()
            .map(|k| stats.category_count(*k))
            .sum();
        let unrecognized = rows
            .iter()
            .filter(|r| ActivityKind::parse(&r.activity_type).is_none())
            .count() as i64;
        assert_eq!(categorized + unrecognized, stats.total_sessions);
        assert_eq!(stats.total_sessions, rows.len() as i64);
    }

    #[test]
    fn test_absent_durations_treated_as_zero() {
        let rows = vec![
            session("meditation", None),
            session("music", Some(12.5)),
            session("sounds", None),
        ];

        let stats = aggregate(&rows, None);
        assert_eq!(stats.total_minutes, 12.5);
        assert!(!stats.total_minutes.is_nan());
    }

    #[test]
    fn test_non_finite_duration_does_not_poison_sum() {
        let rows = vec![
            session("meditation", Some(f64::NAN)),
            session("music", Some(5.0)),
        ];

        let stats = aggregate(&rows, None);
        assert_eq!(stats.total_minutes, 5.0);
        assert!(!stats.total_minutes.is_nan());
    }

    #[test]
    fn test_missing_streak_defaults_to_zero() {
        let stats = aggregate(&[session("music", Some(5.0))], None);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
    }
}
