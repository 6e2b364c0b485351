//! Storage layer for spendlog
//!
//! JSON repositories for accounts and entries, plus the audit logger every
//! mutation goes through.

pub mod accounts;
pub mod entries;
pub mod file_io;

pub use accounts::AccountRepository;
pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};

use std::sync::PoisonError;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SpendlogPaths;
use crate::error::SpendlogError;

pub(crate) fn lock_error<T>(e: PoisonError<T>) -> SpendlogError {
    SpendlogError::Storage(format!("Repository lock poisoned: {}", e))
}

/// Owns the repositories and the audit log for one data directory
pub struct Storage {
    paths: SpendlogPaths,
    pub accounts: AccountRepository,
    pub entries: EntryRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create storage over a data directory, creating the directories
    pub fn new(paths: SpendlogPaths) -> Result<Self, SpendlogError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            entries: EntryRepository::new(paths.entries_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpendlogPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&mut self) -> Result<(), SpendlogError> {
        self.accounts.load()?;
        self.entries.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), SpendlogError> {
        self.accounts.save()?;
        self.entries.save()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        record: &T,
    ) -> Result<(), SpendlogError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, record))
    }

    /// Log an update; the change summary is derived from the two snapshots
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), SpendlogError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        record: &T,
    ) -> Result<(), SpendlogError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, record))
    }

    /// Write several audit entries at once
    pub fn log_batch(&self, entries: &[AuditEntry]) -> Result<(), SpendlogError> {
        self.audit.log_batch(entries)
    }
}
