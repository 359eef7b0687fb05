//! Path management for contacts-cli
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACTS_CLI_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory from the `directories` crate
//!    (`~/.config/contacts-cli` on Linux)

use std::ffi::OsString;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ContactsError;

/// Environment variable overriding the base directory
pub const CONFIG_DIR_ENV: &str = "CONTACTS_CLI_CONFIG_DIR";

/// Manages all paths used by contacts-cli
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    /// Base directory for all contacts-cli files
    base_dir: PathBuf,
}

impl ContactsPaths {
    /// Create a new ContactsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ContactsError> {
        Self::from_override(std::env::var_os(CONFIG_DIR_ENV))
    }

    /// Resolve from an explicit override, falling back to the platform default
    fn from_override(custom: Option<OsString>) -> Result<Self, ContactsError> {
        let base_dir = match custom {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ContactsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactsError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ContactsError> {
    ProjectDirs::from("", "", "contacts-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_override_wins_over_default() {
        let temp_dir = TempDir::new().unwrap();
        let custom = Some(temp_dir.path().as_os_str().to_os_string());

        let paths = ContactsPaths::from_override(custom).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
