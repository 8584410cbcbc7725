//! Client-local key/value storage backends.
//!
//! Every backend follows the Web Storage contract: string keys map to string
//! values, and each call is a single synchronous read or write. Nothing above
//! this layer knows which backend is in use.

mod file;
mod memory;
mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the `SQLite` backend inside the data directory
pub const SQLITE_FILE_NAME: &str = "quill.db";

/// Directory name of the file backend inside the data directory
pub const FILE_STORAGE_DIR_NAME: &str = "storage";

/// Synchronous string key/value storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Which storage backend holds the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Single `SQLite` database file
    #[default]
    Sqlite,
    /// One JSON file per key
    File,
    /// Process memory only; nothing survives exit
    Memory,
}

impl StorageBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

/// Open the configured backend rooted at `data_dir`
pub fn open_storage(
    backend: StorageBackend,
    data_dir: &Path,
) -> Result<Box<dyn KeyValueStorage>> {
    tracing::debug!(
        "Opening {} storage under {}",
        backend.as_str(),
        data_dir.display()
    );
    let storage: Box<dyn KeyValueStorage> = match backend {
        StorageBackend::Sqlite => Box::new(SqliteStorage::open(data_dir.join(SQLITE_FILE_NAME))?),
        StorageBackend::File => Box::new(FileStorage::new(data_dir.join(FILE_STORAGE_DIR_NAME))),
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
    };
    Ok(storage)
}

fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(Error::InvalidInput("storage key cannot be empty".into()));
    }
    Ok(())
}
