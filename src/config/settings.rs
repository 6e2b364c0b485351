//! User settings for spendlog
//!
//! Manages display preferences such as the default dashboard page size.
//! Amounts are always shown in rupees.

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::engine::PageSize;
use crate::error::SpendlogError;

/// User settings for spendlog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rows per dashboard page when no preference is given
    #[serde(default)]
    pub default_page_size: PageSize,

    /// Whether `init` has been run
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_page_size: PageSize::default(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendlogPaths) -> Result<Self, SpendlogError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendlogError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendlogError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlogPaths) -> Result<(), SpendlogError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendlogError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendlogError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
