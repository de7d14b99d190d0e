//! Session store collaborator
//!
//! Read-only queries by user id against the backend's per-user records,
//! plus the append path the `log` command uses. "No data" is a normal
//! answer for both queries, never an error; the aggregator degrades to
//! zeroed stats on its own.

mod schema;

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use uuid::Uuid;

use crate::stats::{ActivitySession, StreakSummary};

pub use schema::SCHEMA;

pub trait SessionStore {
    /// Streak counters for a user, if the backend has any
    fn fetch_streak(&self, user_id: &str) -> Result<Option<StreakSummary>>;

    /// All completed activity sessions for a user, oldest first
    fn fetch_sessions(&self, user_id: &str) -> Result<Vec<ActivitySession>>;

    /// Append a completed session, returning its id
    fn record_session(
        &self,
        user_id: &str,
        activity_type: &str,
        duration_minutes: Option<f64>,
    ) -> Result<String>;
}

pub struct SqliteSessionStore {
    conn: Connection,
}

impl SqliteSessionStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Refresh a user's streak counters (sync job write path)
    pub fn upsert_streak(&self, user_id: &str, streak: &StreakSummary) -> Result<()> {
        self.conn.execute(
            "INSERT INTO user_streaks (user_id, current_streak, longest_streak, updated_at)
             VALUES (?, ?, ?, datetime('now'))
             ON CONFLICT(user_id) DO UPDATE SET
                 current_streak = excluded.current_streak,
                 longest_streak = excluded.longest_streak,
                 updated_at = datetime('now')",
            params![user_id, streak.current_streak, streak.longest_streak],
        )?;
        Ok(())
    }
}

impl SessionStore for SqliteSessionStore {
    fn fetch_streak(&self, user_id: &str) -> Result<Option<StreakSummary>> {
        let row = self
            .conn
            .query_row(
                "SELECT current_streak, longest_streak FROM user_streaks WHERE user_id = ?",
                params![user_id],
                |row| {
                    Ok(StreakSummary {
                        current_streak: row.get(0)?,
                        longest_streak: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    fn fetch_sessions(&self, user_id: &str) -> Result<Vec<ActivitySession>> {
        let mut stmt = self.conn.prepare(
            "SELECT activity_type, duration_minutes FROM activity_sessions
             WHERE user_id = ?
             ORDER BY completed_at",
        )?;

        let rows = stmt.query_map(params![user_id], |row| {
            Ok(ActivitySession {
                activity_type: row.get(0)?,
                duration_minutes: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn record_session(
        &self,
        user_id: &str,
        activity_type: &str,
        duration_minutes: Option<f64>,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO activity_sessions (id, user_id, activity_type, duration_minutes, completed_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                id,
                user_id,
                activity_type,
                duration_minutes,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (tempfile::TempDir, SqliteSessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteSessionStore::open(&dir.path().join("sessions.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_empty_store_returns_no_data() {
        let (_dir, store) = open_store();
        assert!(store.fetch_streak("u1").unwrap().is_none());
        assert!(store.fetch_sessions("u1").unwrap().is_empty());
    }

    #[test]
    fn test_record_then_fetch() {
        let (_dir, store) = open_store();
        store.record_session("u1", "meditation", Some(10.0)).unwrap();
        store.record_session("u1", "music", None).unwrap();
        store.record_session("u2", "sounds", Some(5.0)).unwrap();

        let sessions = store.fetch_sessions("u1").unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].activity_type, "meditation");
        assert_eq!(sessions[0].duration_minutes, Some(10.0));
        assert_eq!(sessions[1].duration_minutes, None);
    }

    #[test]
    fn test_upsert_streak() {
        let (_dir, store) = open_store();
        store
            .upsert_streak(
                "u1",
                &StreakSummary {
                    current_streak: 2,
                    longest_streak: 5,
                },
            )
            .unwrap();
        store
            .upsert_streak(
                "u1",
                &StreakSummary {
                    current_streak: 3,
                    longest_streak: 5,
                },
            )
            .unwrap();

        let streak = store.fetch_streak("u1").unwrap().unwrap();
        assert_eq!(streak.current_streak, 3);
        assert_eq!(streak.longest_streak, 5);
    }
}
