//! Persistent journal configuration.
//!
//! A small JSON document selecting the storage backend and, optionally, where
//! its data lives. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::StorageBackend;
use crate::util::normalize_text_option;

pub const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuillConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            backend: StorageBackend::default(),
            data_dir: None,
        }
    }
}

const fn default_config_version() -> u32 {
    CONFIG_VERSION
}

impl QuillConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::InvalidInput(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                error
            ))
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Blank data directories count as unset.
    pub fn normalize(&mut self) {
        self.data_dir = normalize_text_option(
            self.data_dir
                .take()
                .map(|dir| dir.to_string_lossy().into_owned()),
        )
        .map(PathBuf::from);
    }
}
