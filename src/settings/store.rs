//! Settings store trait and file-backed implementation
//!
//! This module provides:
//! - The `SettingsStore` capability consumed by menu components
//! - `FileSettingsStore`, which persists the key-value map as a JSON file

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Capability for reading and writing persisted string settings
///
/// Components receive a `&dyn SettingsStore` (or `&mut`) instead of reaching
/// for ambient global state, so tests can substitute an in-memory map.
/// A missing key is an ordinary `None`, never an error.
pub trait SettingsStore {
    /// Look up a persisted value
    fn get(&self, key: &str) -> Option<String>;

    /// Set or replace a value (in memory; persistence is the
    /// implementation's concern)
    fn set(&mut self, key: &str, value: &str);
}

/// JSON-file-backed settings store
///
/// Loads the whole file once at open time and serves reads from memory.
/// Writes are staged in memory and persisted by [`FileSettingsStore::flush`].
///
/// # Example
///
/// ```ignore
/// let mut store = FileSettingsStore::open("~/.kart_racer/settings.json");
/// if let Some(name) = store.get(PLAYER_NAME_KEY) {
///     println!("welcome back, {}", name);
/// }
/// ```
pub struct FileSettingsStore {
    path: PathBuf,
    data: SettingsFile,
}

impl FileSettingsStore {
    /// Opens the store at the given path
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store, with a warning on stderr: the menu must
    /// come up regardless of what happened to the settings file.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let data = match Self::load(&path) {
            Ok(Some(data)) => data,
            Ok(None) => SettingsFile::default(),
            Err(e) => {
                eprintln!("Warning: ignoring settings file {}: {}", path.display(), e);
                SettingsFile::default()
            }
        };

        FileSettingsStore { path, data }
    }

    /// Default settings path: `~/.kart_racer/settings.json`, or
    /// `./settings.json` when no home directory can be resolved
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".kart_racer/settings.json"))
            .unwrap_or_else(|| PathBuf::from("./settings.json"))
    }

    fn load(path: &Path) -> Result<Option<SettingsFile>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data: SettingsFile = serde_json::from_str(&json)?;

        // Version check
        if data.version > CURRENT_SETTINGS_VERSION {
            return Err(SettingsError::InvalidVersion(data.version));
        }

        Ok(Some(data))
    }

    /// Write the current values back to disk
    ///
    /// Creates the parent directory if it doesn't exist. Serializes as pretty
    /// JSON for readability/debugging.
    pub fn flush(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;

        Ok(())
    }

    /// Path this store reads from and writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PLAYER_NAME_KEY;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kart_racer_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let path = temp_settings_path("missing");
        let _ = fs::remove_file(&path);

        let store = FileSettingsStore::open(&path);
        assert_eq!(store.get(PLAYER_NAME_KEY), None);
    }

    #[test]
    fn test_set_get_flush_reload() {
        let path = temp_settings_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = FileSettingsStore::open(&path);
        store.set(PLAYER_NAME_KEY, "Alice");
        assert_eq!(store.get(PLAYER_NAME_KEY), Some("Alice".to_string()));
        store.flush().expect("flush should succeed");

        let reloaded = FileSettingsStore::open(&path);
        assert_eq!(reloaded.get(PLAYER_NAME_KEY), Some("Alice".to_string()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let path = temp_settings_path("corrupt");
        fs::write(&path, "not json at all {").expect("write should succeed");

        let store = FileSettingsStore::open(&path);
        assert_eq!(store.get(PLAYER_NAME_KEY), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_version_is_rejected_not_fatal() {
        let path = temp_settings_path("version");
        fs::write(&path, r#"{"version": 999, "values": {"KartRacer.PlayerName": "Bob"}}"#)
            .expect("write should succeed");

        // Unknown future version is treated like a corrupt file
        let store = FileSettingsStore::open(&path);
        assert_eq!(store.get(PLAYER_NAME_KEY), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let path = temp_settings_path("overwrite");
        let _ = fs::remove_file(&path);

        let mut store = FileSettingsStore::open(&path);
        store.set(PLAYER_NAME_KEY, "Alice");
        store.set(PLAYER_NAME_KEY, "Bob");
        assert_eq!(store.get(PLAYER_NAME_KEY), Some("Bob".to_string()));
    }
}
