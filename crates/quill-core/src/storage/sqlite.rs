//! `SQLite`-backed storage, the default backend.

use std::path::Path;

use rusqlite::{params, OptionalExtension};

use super::{validate_key, KeyValueStorage};
use crate::db::Database;
use crate::error::Result;
use crate::util::unix_timestamp_millis_now;

/// Key/value rows in the `storage` table
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }

    /// Open an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM storage WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.db.connection().execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, unix_timestamp_millis_now()],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.db
            .connection()
            .execute("DELETE FROM storage WHERE key = ?", params![key])?;
        Ok(())
    }
}
