//! Settings persistence: the store seam and its filesystem implementation.

use std::fs;
use std::path::PathBuf;

use crate::settings::PickerSettings;

const SETTINGS_FILE: &str = "settings.json";

/// Error type for settings storage operations.
#[derive(Debug)]
pub enum SettingsError {
    /// IO error reading/writing the settings file
    Io(std::io::Error),
    /// JSON parsing error
    Deserialize(serde_json::Error),
    /// JSON serialization error
    Serialize(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Deserialize(e) => write!(f, "JSON parse error: {}", e),
            Self::Serialize(e) => write!(f, "JSON serialize error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Storage backend for per-module settings records.
///
/// One JSON record per module; readers and writers only ever see whole
/// records, never partial updates.
pub trait SettingsStore: Send + Sync {
    /// Whether a persisted record exists. "Not found" is `false`, never an
    /// error.
    fn exists(&self, module: &str) -> bool;

    /// Read and deserialize the module's record.
    fn load(&self, module: &str) -> Result<PickerSettings, SettingsError>;

    /// Serialize and overwrite the module's record.
    fn save(&self, module: &str, settings: &PickerSettings) -> Result<(), SettingsError>;

    /// Persist a record with built-in defaults.
    fn create_default(&self, module: &str) -> Result<(), SettingsError> {
        self.save(module, &PickerSettings::default())
    }
}

/// Filesystem-backed store rooted at a settings directory.
///
/// The record for module `m` lives at `<root>/<m>/settings.json`. Writes are
/// plain file overwrites, visible to any external watcher of the same path.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    root: PathBuf,
}

impl JsonSettingsStore {
    /// Store rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform default settings root (`<config_dir>/huepick`).
    ///
    /// Falls back to the current directory when the platform reports no
    /// config directory.
    pub fn default_root() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("huepick")
    }

    /// Path of the settings file for `module`.
    pub fn settings_path(&self, module: &str) -> PathBuf {
        self.root.join(module).join(SETTINGS_FILE)
    }
}

impl SettingsStore for JsonSettingsStore {
    fn exists(&self, module: &str) -> bool {
        self.settings_path(module).is_file()
    }

    fn load(&self, module: &str) -> Result<PickerSettings, SettingsError> {
        let content = fs::read_to_string(self.settings_path(module))?;
        serde_json::from_str(&content).map_err(SettingsError::Deserialize)
    }

    fn save(&self, module: &str, settings: &PickerSettings) -> Result<(), SettingsError> {
        let path = self.settings_path(module);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
        fs::write(path, content)?;
        Ok(())
    }
}
