//! Locale preference persistence.
//!
//! This module handles loading and saving the chosen locale across sessions.
//! Loading never fails: missing, unreadable, or invalid settings degrade to
//! the default locale. Saving reports real filesystem errors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::registry::{is_valid_locale_code, DEFAULT_LOCALE};

/// Settings file name within the config directory
const SETTINGS_FILE: &str = "locale.json";

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while saving the locale preference
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Config directory could not be determined
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to create the config directory
    #[error("Failed to create config directory: {0}")]
    CreateDirError(String),

    /// Failed to serialize the preference
    #[error("Failed to serialize settings: {0}")]
    SerializeError(String),

    /// Failed to write the settings file
    #[error("Failed to write settings file: {0}")]
    WriteError(String),
}

// ============================================================================
// Preference
// ============================================================================

/// The locale preference that persists across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalePreference {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Selected locale code
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_version() -> u32 {
    1
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self {
            version: 1,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl LocalePreference {
    /// Get the config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("localekit"))
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join(SETTINGS_FILE))
    }

    /// Load the preference from disk.
    ///
    /// A stored locale outside the supported set counts as invalid and is
    /// replaced with the default, so downstream code never sees an
    /// unsupported code coming out of storage.
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        let mut settings: LocalePreference = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        if !is_valid_locale_code(&settings.locale) {
            tracing::warn!(
                "Stored locale {:?} is not supported, using {}",
                settings.locale,
                DEFAULT_LOCALE
            );
            settings.locale = DEFAULT_LOCALE.to_string();
        }

        settings
    }

    /// Save the preference to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::get_settings_path().ok_or(SettingsError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::CreateDirError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| SettingsError::SerializeError(e.to_string()))?;

        std::fs::write(&path, content).map_err(|e| SettingsError::WriteError(e.to_string()))?;

        Ok(())
    }
}
