//! Persisted key/value overlay for user settings.
//!
//! Stored as a flat JSON object next to the session's record file and
//! rewritten whole on every `set`.

use crate::error::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Base URL (or `{world}/{x}/{y}/{z}` template) of the external map viewer.
pub const MAP_BASE_URL_KEY: &str = "blueMapBaseUrl";

/// Prefix for per-dimension world name overrides used in map links.
pub const MAP_WORLD_KEY_PREFIX: &str = "blueMapWorld.";

#[derive(Debug, Default)]
struct ConfigState {
    values: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

/// Key/value config with its own load/save lifecycle.
#[derive(Debug, Default)]
pub struct ConfigStore {
    state: RwLock<ConfigState>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the overlay at `path`. Missing or unreadable files start empty.
    pub fn on_session_start(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let values = match Self::load(&path) {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), keys = values.len(), "config loaded");

        let mut state = self.state.write();
        state.values = values;
        state.path = Some(path);
    }

    pub fn on_session_end(&self) {
        let mut state = self.state.write();
        state.values.clear();
        state.path = None;
    }

    /// Value for `key`, or `default` when absent.
    pub fn get(&self, key: &str, default: &str) -> String {
        self.try_get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn try_get(&self, key: &str) -> Option<String> {
        self.state.read().values.get(key).cloned()
    }

    pub fn get_all(&self) -> BTreeMap<String, String> {
        self.state.read().values.clone()
    }

    /// Store `value` under `key` and persist. Returns false if saving failed.
    ///
    /// The in-memory value is kept even when saving fails.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to save config");
                false
            }
        }
    }

    pub fn try_set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.write();
        state.values.insert(key.to_string(), value.to_string());
        match &state.path {
            Some(path) => Self::save(path, &state.values),
            None => Ok(()),
        }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_vec_pretty(values)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.write_all(&encoded)?;
        file.write_all(b"\n")?;
        Ok(())
    }
}
