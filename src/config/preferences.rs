//! Persisted dashboard preferences
//!
//! The dashboard remembers the last selected account, month and year between
//! runs. Values are plain strings under fixed keys so the store itself knows
//! nothing about filters.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::engine::{FilterState, MonthFilter, YearFilter};
use crate::error::SpendlogResult;
use crate::models::{Account, AccountId};
use crate::storage::file_io::{read_json, write_json_atomic};

/// Key holding the selected account id
pub const SELECTED_ACCOUNT: &str = "selectedAccount";
/// Stored under [`SELECTED_ACCOUNT`] when every account is selected
pub const ALL_ACCOUNTS: &str = "All Accounts";
/// Key holding the selected month, or the "All Months" sentinel
pub const SELECTED_MONTH: &str = "selectedMonth";
/// Key holding the selected year, or the "All Years" sentinel
pub const SELECTED_YEAR: &str = "selectedYear";

/// A string key/value store for preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> SpendlogResult<()>;

    fn remove(&mut self, key: &str) -> SpendlogResult<()>;
}

/// Preferences kept in `preferences.json`, written through on every change
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Open the store, reading existing values if the file is present
    pub fn open(path: PathBuf) -> SpendlogResult<Self> {
        let values = read_json(&path)?;
        Ok(Self { path, values })
    }

    fn flush(&self) -> SpendlogResult<()> {
        write_json_atomic(&self.path, &self.values)
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SpendlogResult<()> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> SpendlogResult<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// In-memory preferences, nothing is persisted
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SpendlogResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SpendlogResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Maps a [`FilterState`] to and from the preference keys
pub struct FilterPreferences;

impl FilterPreferences {
    /// Rebuild the filters saved by a previous run
    ///
    /// A saved account is only used if it is still among `accounts`; otherwise
    /// the first account is selected and month and year fall back to "All".
    /// A saved [`ALL_ACCOUNTS`] keeps every account selected. Saved month and
    /// year values that do not parse are ignored.
    pub fn restore(store: &dyn PreferenceStore, accounts: &[Account]) -> FilterState {
        let saved = match store.get(SELECTED_ACCOUNT) {
            Some(raw) if raw == ALL_ACCOUNTS => Some(None),
            Some(raw) => raw
                .parse::<AccountId>()
                .ok()
                .filter(|id| accounts.iter().any(|a| a.id == *id))
                .map(Some),
            None => None,
        };

        let Some(account) = saved else {
            return FilterState::for_account(accounts.first().map(|a| a.id));
        };

        let month = store
            .get(SELECTED_MONTH)
            .and_then(|raw| MonthFilter::parse(&raw))
            .unwrap_or_default();
        let year = store
            .get(SELECTED_YEAR)
            .map(|raw| YearFilter::parse(&raw))
            .unwrap_or_default();

        FilterState {
            account,
            month,
            year,
        }
    }

    /// Save the filters for the next run
    pub fn persist(store: &mut dyn PreferenceStore, filter: &FilterState) -> SpendlogResult<()> {
        match filter.account {
            Some(id) => store.set(SELECTED_ACCOUNT, &id.to_string())?,
            None => store.set(SELECTED_ACCOUNT, ALL_ACCOUNTS)?,
        }
        store.set(SELECTED_MONTH, &filter.month.to_string())?;
        store.set(SELECTED_YEAR, &filter.year.to_string())?;
        Ok(())
    }
}
