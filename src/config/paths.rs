//! Path management for spendlog
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLOG_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/spendlog` on Linux, `%APPDATA%\spendlog` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SpendlogError;

/// Manages all paths used by spendlog
#[derive(Debug, Clone)]
pub struct SpendlogPaths {
    base_dir: PathBuf,
}

impl SpendlogPaths {
    /// Create a new SpendlogPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpendlogError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDLOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendlogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted dashboard preferences
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to accounts.json
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Get the path to entries.json
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("entries.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendlogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendlogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendlogError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if spendlog has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendlogError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| SpendlogError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("spendlog"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("preferences.json")
        );
        assert_eq!(
            paths.entries_file(),
            temp_dir.path().join("data").join("entries.json")
        );
    }
}
