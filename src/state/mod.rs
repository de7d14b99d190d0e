//! Validated local state cache
//!
//! Wraps a key-value medium with a schema-validated read/write contract:
//! a read always yields either a payload that deserialized cleanly AND
//! passed validation, or the caller's fallback value. Writes are
//! fire-and-forget. No failure on either path ever reaches the caller as
//! an error; everything is downgraded to a `tracing::warn`.
//!
//! Validation is atomic per record: one field out of range discards the
//! whole payload. Downstream consumers assume full-record consistency, so
//! partial corruption is treated as total corruption.

mod medium;
mod schema;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub use medium::{KvMedium, MemoryMedium, SqliteMedium};
pub use schema::SCHEMA;

/// Storage key for the cached streak record
pub const STREAK_KEY: &str = "stillpoint-streak";

/// Storage key for cached user preferences
pub const PREFS_KEY: &str = "stillpoint-prefs";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("storage medium failure: {0}")]
    Medium(String),
    #[error("field '{field}' violates constraint: {reason}")]
    Constraint { field: &'static str, reason: String },
}

/// Schema validation for records kept in the local cache.
///
/// Implementations check field-level constraints after deserialization.
/// Any violation rejects the entire record; there is no partial-field
/// recovery.
pub trait Validate {
    fn validate(&self) -> Result<(), StateError>;
}

fn floor_zero(field: &'static str, value: i64) -> Result<(), StateError> {
    if value < 0 {
        return Err(StateError::Constraint {
            field,
            reason: format!("{} is below minimum 0", value),
        });
    }
    Ok(())
}

/// Locally cached streak counters. All fields default to 0 when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    #[serde(default)]
    pub current_streak: i64,
    #[serde(default)]
    pub longest_streak: i64,
    #[serde(default)]
    pub total_sessions: i64,
    #[serde(default)]
    pub plant_level: i64,
    #[serde(default)]
    pub causes_helped: i64,
}

impl Default for StreakRecord {
    fn default() -> Self {
        DEFAULT_STREAK.clone()
    }
}

/// The shared zeroed fallback, constructed once and passed by reference
pub const DEFAULT_STREAK: StreakRecord = StreakRecord {
    current_streak: 0,
    longest_streak: 0,
    total_sessions: 0,
    plant_level: 0,
    causes_helped: 0,
};

impl Validate for StreakRecord {
    fn validate(&self) -> Result<(), StateError> {
        floor_zero("currentStreak", self.current_streak)?;
        floor_zero("longestStreak", self.longest_streak)?;
        floor_zero("totalSessions", self.total_sessions)?;
        floor_zero("plantLevel", self.plant_level)?;
        floor_zero("causesHelped", self.causes_helped)?;
        Ok(())
    }
}

/// Locally cached display preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub reminder_hour: Option<i64>,
}

impl Validate for Preferences {
    fn validate(&self) -> Result<(), StateError> {
        if let Some(hour) = self.reminder_hour {
            if !(0..=23).contains(&hour) {
                return Err(StateError::Constraint {
                    field: "reminderHour",
                    reason: format!("{} is not a valid hour", hour),
                });
            }
        }
        Ok(())
    }
}

pub struct StateStore<M: KvMedium> {
    medium: M,
}

impl StateStore<SqliteMedium> {
    pub fn open(path: &std::path::Path) -> anyhow::Result<Self> {
        let medium = SqliteMedium::open(path)?;
        Ok(Self { medium })
    }
}

impl<M: KvMedium> StateStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Read a validated record, falling back on any failure.
    ///
    /// Missing key, unreadable medium, malformed JSON, and schema
    /// violations all yield a clone of `fallback`. Failures other than
    /// plain absence are logged.
    pub fn read<T>(&self, key: &str, fallback: &T) -> T
    where
        T: DeserializeOwned + Validate + Clone,
    {
        let raw = match self.medium.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback.clone(),
            Err(e) => {
                warn!(key, error = %e, "state read failed, using defaults");
                return fallback.clone();
            }
        };

        let parsed: T = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key, error = %e, "invalid state payload, using defaults");
                return fallback.clone();
            }
        };

        if let Err(e) = parsed.validate() {
            warn!(key, error = %e, "state payload failed validation, using defaults");
            return fallback.clone();
        }

        parsed
    }

    /// Persist a record, swallowing any failure.
    ///
    /// Callers must not assume the write succeeded; a medium failure is
    /// logged and the call returns normally.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize state payload");
                return;
            }
        };

        if let Err(e) = self.medium.set(key, &payload) {
            warn!(key, error = %e, "failed to persist state payload");
        }
    }

    /// Cached streak record, or zeros
    pub fn streak(&self) -> StreakRecord {
        self.read(STREAK_KEY, &DEFAULT_STREAK)
    }

    pub fn save_streak(&self, record: &StreakRecord) {
        self.write(STREAK_KEY, record);
    }

    /// Cached preferences, or empty defaults
    pub fn preferences(&self) -> Preferences {
        self.read(PREFS_KEY, &Preferences::default())
    }

    pub fn save_preferences(&self, prefs: &Preferences) {
        self.write(PREFS_KEY, prefs);
    }
}
