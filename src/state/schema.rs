//! SQLite schema for the local key-value state cache
//!
//! One table, string keys to string payloads. The store layer treats the
//! payloads as opaque JSON; absence of a key is normal, not an error.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;
