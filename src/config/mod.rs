//! Configuration module for spendlog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Persisted dashboard filter preferences

pub mod paths;
pub mod preferences;
pub mod settings;

pub use paths::SpendlogPaths;
pub use preferences::{
    FilterPreferences, JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore,
};
pub use settings::Settings;
