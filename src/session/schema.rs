//! SQLite schema for the synced session replica
//!
//! Mirrors the two per-user tables the backend exposes: streak counters
//! and completed activity sessions. Rows here are read-mostly; the only
//! local writes are `log` appending a session and the sync job refreshing
//! streaks.

pub const SCHEMA: &str = r#"
-- Per-user streak counters
CREATE TABLE IF NOT EXISTS user_streaks (
    user_id TEXT PRIMARY KEY,
    current_streak INTEGER DEFAULT 0,
    longest_streak INTEGER DEFAULT 0,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Completed activity sessions
CREATE TABLE IF NOT EXISTS activity_sessions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    activity_type TEXT NOT NULL,           -- 'meditation', 'music', 'sounds', ...
    duration_minutes REAL,                 -- NULL when the client did not report one
    completed_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_sessions_user ON activity_sessions(user_id);
CREATE INDEX IF NOT EXISTS idx_sessions_completed ON activity_sessions(completed_at DESC);
"#;
