//! Key-value storage mediums
//!
//! A medium is string-keyed, string-valued storage with get/set/absence
//! semantics. No transactions, no expiry. `SqliteMedium` is the real one;
//! `MemoryMedium` backs tests.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::schema::SCHEMA;
use super::StateError;

/// Single-key atomic get/set over an opaque string payload
pub trait KvMedium {
    /// Look up a key. Absence is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StateError>;

    /// Store a value under a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StateError>;
}

pub struct SqliteMedium {
    conn: Connection,
}

impl SqliteMedium {
    pub fn open(path: &Path) -> Result<Self, StateError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StateError::Medium(e.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|e| StateError::Medium(e.to_string()))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StateError::Medium(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl KvMedium for SqliteMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StateError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StateError::Medium(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StateError> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
                params![key, value],
            )
            .map_err(|e| StateError::Medium(e.to_string()))?;
        Ok(())
    }
}

/// In-memory medium for tests
#[derive(Default)]
pub struct MemoryMedium {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload, bypassing the validated write path
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KvMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StateError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StateError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Medium that fails every call, for exercising recovery paths
#[cfg(test)]
pub struct BrokenMedium;

#[cfg(test)]
impl KvMedium for BrokenMedium {
    fn get(&self, _key: &str) -> Result<Option<String>, StateError> {
        Err(StateError::Medium("medium unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StateError> {
        Err(StateError::Medium("medium unavailable".to_string()))
    }
}
