//! Ledger entry repository backed by `data/entries.json`
//!
//! Keeps an account index so an account's entries can be fetched without a
//! full scan.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendlogError;
use crate::models::{AccountId, EntryId, EntryRecord, Month};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<EntryRecord>,
}

/// Newest period first, then oldest record first
fn newest_first(a: &EntryRecord, b: &EntryRecord) -> std::cmp::Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| b.month.index().cmp(&a.month.index()))
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Entry records with an account index
pub struct EntryRepository {
    path: PathBuf,
    data: RwLock<HashMap<EntryId, EntryRecord>>,
    by_account: RwLock<HashMap<AccountId, Vec<EntryId>>>,
}

impl EntryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_account: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk and rebuild the index
    pub fn load(&self) -> Result<(), SpendlogError> {
        let file_data: EntryData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_account = self.by_account.write().map_err(lock_error)?;
        data.clear();
        by_account.clear();

        for record in file_data.entries {
            by_account.entry(record.account_id).or_default().push(record.id);
            data.insert(record.id, record);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), SpendlogError> {
        let file_data = EntryData {
            entries: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: EntryId) -> Result<Option<EntryRecord>, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Every record, newest period first
    pub fn get_all(&self) -> Result<Vec<EntryRecord>, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(newest_first);
        Ok(records)
    }

    /// Records for one account, newest period first
    pub fn get_by_account(&self, account_id: AccountId) -> Result<Vec<EntryRecord>, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;
        let by_account = self.by_account.read().map_err(lock_error)?;

        let ids = by_account.get(&account_id).map(Vec::as_slice).unwrap_or(&[]);
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        records.sort_by(newest_first);
        Ok(records)
    }

    /// The record for an account and period, if any
    pub fn find_period(
        &self,
        account_id: AccountId,
        month: Month,
        year: i32,
    ) -> Result<Option<EntryRecord>, SpendlogError> {
        Ok(self
            .get_by_account(account_id)?
            .into_iter()
            .find(|r| r.covers(account_id, month, year)))
    }

    /// Insert or replace a record, moving it between accounts in the index
    pub fn upsert(&self, record: EntryRecord) -> Result<(), SpendlogError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_account = self.by_account.write().map_err(lock_error)?;

        if let Some(old) = data.get(&record.id) {
            if let Some(ids) = by_account.get_mut(&old.account_id) {
                ids.retain(|&id| id != record.id);
            }
        }

        by_account.entry(record.account_id).or_default().push(record.id);
        data.insert(record.id, record);
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn delete(&self, id: EntryId) -> Result<Option<EntryRecord>, SpendlogError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_account = self.by_account.write().map_err(lock_error)?;

        let removed = data.remove(&id);
        if let Some(record) = &removed {
            if let Some(ids) = by_account.get_mut(&record.account_id) {
                ids.retain(|&eid| eid != id);
            }
        }
        Ok(removed)
    }

    pub fn count_for_account(&self, account_id: AccountId) -> Result<usize, SpendlogError> {
        let by_account = self.by_account.read().map_err(lock_error)?;
        Ok(by_account.get(&account_id).map_or(0, Vec::len))
    }

    pub fn count(&self) -> Result<usize, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
