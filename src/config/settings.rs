//! User settings for contacts-cli
//!
//! Manages user preferences: the default birthday window, the log filter and
//! the assistant prompt.

use serde::{Deserialize, Serialize};

use super::paths::ContactsPaths;
use crate::book::DEFAULT_UPCOMING_DAYS;
use crate::error::ContactsError;

/// User settings for contacts-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Days ahead the `birthdays` command looks by default
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// tracing filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_directive")]
    pub log_directive: String,

    /// Prompt shown before each assistant command
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_upcoming_days() -> u32 {
    DEFAULT_UPCOMING_DAYS
}

fn default_log_directive() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_days: default_upcoming_days(),
            log_directive: default_log_directive(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactsPaths) -> Result<Self, ContactsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContactsError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ContactsError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactsPaths) -> Result<(), ContactsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContactsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactsError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.upcoming_days, 7);
        assert_eq!(settings.log_directive, "warn");
        assert_eq!(settings.prompt, "Enter a command: ");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            upcoming_days: 14,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.upcoming_days, 14);
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"upcoming_days": 3}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.upcoming_days, 3);
        assert_eq!(loaded.prompt, "Enter a command: ");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ContactsError::Config(_))
        ));
    }
}
