use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::prefs::{ANNOUNCEMENT_KEY, FILE_NAME, LANG_KEY};
use crate::error::Result;

/// Persisted user preferences, stored as a flat JSON object.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    path: Option<PathBuf>,
    values: PreferenceValues,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct PreferenceValues(BTreeMap<String, String>);

impl Preferences {
    /// In-memory preferences that are never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/ourtaiko/preferences.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ourtaiko").join(FILE_NAME))
    }

    /// Load preferences from `path`. A missing file gives empty preferences.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let values = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            debug!("No preferences at {}, starting empty", path.display());
            PreferenceValues::default()
        };
        Ok(Self {
            path: Some(path.to_path_buf()),
            values,
        })
    }

    /// Like [`load`](Self::load), but an unreadable file falls back to empty
    /// preferences bound to the same path.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(
                    "Failed to load preferences from {}: {}, using defaults",
                    path.as_ref().display(),
                    e
                );
                Self {
                    path: Some(path.as_ref().to_path_buf()),
                    values: PreferenceValues::default(),
                }
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.0.get(key).map(String::as_str)
    }

    /// Set a value and write the file.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.0.insert(key.to_string(), value.into());
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }

    pub fn lang(&self) -> Option<&str> {
        self.get(LANG_KEY)
    }

    pub fn dismissed_announcement(&self) -> Option<&str> {
        self.get(ANNOUNCEMENT_KEY)
    }
}
