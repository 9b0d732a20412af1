//! Theme preference and its persistence.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Visual theme for the user interface.
///
/// Defaults to [`Theme::Dark`], matching a fresh install with no saved
/// preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    /// Flips between dark and light. Toggling twice restores the original.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(InvalidTheme {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a string does not name a theme.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognized theme: {value:?} (expected dark or light)")]
pub struct InvalidTheme {
    /// The rejected input.
    pub value: String,
}

/// Persisted user preferences. Currently a single key: the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Preferences {
    /// Saved visual theme.
    #[serde(default)]
    theme: Theme,
}

impl Preferences {
    /// Creates preferences carrying the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

/// Capability to read and write the preference record.
///
/// The session only depends on this trait, so the core stays testable
/// without touching the filesystem.
pub trait SettingsStore {
    /// Loads the saved preferences, or defaults when nothing is saved yet.
    fn load(&self) -> Result<Preferences, SettingsError>;

    /// Persists the preferences.
    fn save(&mut self, prefs: &Preferences) -> Result<(), SettingsError>;
}

/// Settings store backed by a single TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Creates a store reading and writing the given path.
    #[instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for TomlSettingsStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Preferences, SettingsError> {
        if !self.path.exists() {
            debug!("Settings file not found, using defaults");
            return Ok(Preferences::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
        let prefs: Preferences = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;
        info!(theme = %prefs.theme, "Settings loaded");
        Ok(prefs)
    }

    #[instrument(skip(self, prefs), fields(path = %self.path.display(), theme = %prefs.theme))]
    fn save(&mut self, prefs: &Preferences) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(prefs)
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| SettingsError::new(format!("Failed to write settings file: {}", e)))?;
        debug!("Settings saved");
        Ok(())
    }
}

/// In-memory settings store, cloneable so tests can observe saved state.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    prefs: Arc<Mutex<Preferences>>,
}

impl MemorySettingsStore {
    /// Creates an empty store holding default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently saved preferences.
    pub fn preferences(&self) -> Preferences {
        *self.prefs.lock().unwrap()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Preferences, SettingsError> {
        Ok(*self.prefs.lock().unwrap())
    }

    fn save(&mut self, prefs: &Preferences) -> Result<(), SettingsError> {
        *self.prefs.lock().unwrap() = *prefs;
        Ok(())
    }
}

/// Settings persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error capturing the caller location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
