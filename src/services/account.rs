//! Account service
//!
//! Creating, renaming and deleting spending accounts. Names are unique
//! ignoring case and stored upper-case.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Account, AccountId};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

/// An account with a count of its entries
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    pub entry_count: usize,
    /// "March 2025" for the newest entry, if any
    pub latest_period: Option<String>,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(&self, name: &str) -> SpendlogResult<Account> {
        let account = Account::new(name);
        account
            .validate()
            .map_err(|e| SpendlogError::Validation(e.to_string()))?;

        if self.storage.accounts.name_exists(&account.name, None)? {
            return Err(SpendlogError::Duplicate {
                entity_type: "Account",
                identifier: account.name,
            });
        }

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(account)
    }

    /// The account with this name, created if it does not exist yet
    pub fn get_or_create(&self, name: &str) -> SpendlogResult<Account> {
        match self.storage.accounts.get_by_name(name)? {
            Some(account) => Ok(account),
            None => self.create(name),
        }
    }

    pub fn get(&self, id: AccountId) -> SpendlogResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name (any case) or by id
    pub fn find(&self, identifier: &str) -> SpendlogResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        match identifier.trim().parse::<AccountId>() {
            Ok(id) => self.storage.accounts.get(id),
            Err(_) => Ok(None),
        }
    }

    /// Like [`find`](Self::find), but a missing account is an error
    pub fn require(&self, identifier: &str) -> SpendlogResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| SpendlogError::account_not_found(identifier.trim()))
    }

    /// All accounts sorted by name
    pub fn list(&self) -> SpendlogResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// All accounts with entry counts
    pub fn list_with_summaries(&self) -> SpendlogResult<Vec<AccountSummary>> {
        self.list()?
            .into_iter()
            .map(|account| {
                let records = self.storage.entries.get_by_account(account.id)?;
                let latest_period = records
                    .first()
                    .map(|r| format!("{} {}", r.month, r.year));
                Ok(AccountSummary {
                    entry_count: records.len(),
                    latest_period,
                    account,
                })
            })
            .collect()
    }

    /// Rename an account
    pub fn rename(&self, id: AccountId, name: &str) -> SpendlogResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| SpendlogError::account_not_found(id.to_string()))?;
        let before = account.clone();

        account.rename(name);
        account
            .validate()
            .map_err(|e| SpendlogError::Validation(e.to_string()))?;

        if self.storage.accounts.name_exists(&account.name, Some(id))? {
            return Err(SpendlogError::Duplicate {
                entity_type: "Account",
                identifier: account.name,
            });
        }

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
        )?;

        Ok(account)
    }

    /// Delete an account
    ///
    /// An account that still has entries is only deleted with `cascade`, in
    /// which case its entries go first. Returns the number of entries removed.
    pub fn delete(&self, id: AccountId, cascade: bool) -> SpendlogResult<usize> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| SpendlogError::account_not_found(id.to_string()))?;

        let records = self.storage.entries.get_by_account(id)?;
        if !records.is_empty() && !cascade {
            return Err(SpendlogError::Validation(format!(
                "Account {} still has {} entries; delete them first or use --cascade",
                account.name,
                records.len()
            )));
        }

        let mut audit = Vec::with_capacity(records.len() + 1);
        for record in &records {
            self.storage.entries.delete(record.id)?;
            audit.push(AuditEntry::delete(
                EntityType::Entry,
                record.id.to_string(),
                Some(format!("{} {} {}", account.name, record.month, record.year)),
                record,
            ));
        }
        self.storage.accounts.delete(id)?;

        self.storage.entries.save()?;
        self.storage.accounts.save()?;

        audit.push(AuditEntry::delete(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        ));
        self.storage.log_batch(&audit)?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendlogPaths;
    use crate::models::{EntryRecord, Money, Month};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_record(storage: &Storage, account: &Account, month: Month) {
        storage
            .entries
            .upsert(EntryRecord::new(
                account.id,
                month,
                2024,
                Money::from_major(100),
                Money::from_major(50),
                Money::zero(),
            ))
            .unwrap();
    }

    #[test]
    fn test_create_upper_cases_and_audits() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service.create("  icici ").unwrap();
        assert_eq!(account.name, "ICICI");

        let logged = storage.audit().read_all().unwrap();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].entity_type, EntityType::Account);
    }

    #[test]
    fn test_create_rejects_empty_and_duplicate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        assert!(service.create("   ").unwrap_err().is_validation());

        service.create("sbi").unwrap();
        let err = service.create("SBI").unwrap_err();
        assert!(matches!(err, SpendlogError::Duplicate { .. }));
    }

    #[test]
    fn test_get_or_create_reuses_existing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let first = service.get_or_create("axis").unwrap();
        let second = service.get_or_create("Axis").unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        let account = service.create("hdfc").unwrap();

        assert_eq!(service.find("Hdfc").unwrap().unwrap().id, account.id);
        assert_eq!(service.find(&account.id.to_string()).unwrap().unwrap().id, account.id);
        assert!(service.find("nope").unwrap().is_none());
        assert!(service.require("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_rename() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        let sbi = service.create("sbi").unwrap();
        service.create("axis").unwrap();

        let renamed = service.rename(sbi.id, "state bank").unwrap();
        assert_eq!(renamed.name, "STATE BANK");

        let err = service.rename(sbi.id, "AXIS").unwrap_err();
        assert!(matches!(err, SpendlogError::Duplicate { .. }));

        assert!(service.rename(AccountId::new(), "x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_refuses_accounts_with_entries() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        let account = service.create("sbi").unwrap();
        add_record(&storage, &account, Month::January);
        add_record(&storage, &account, Month::February);

        assert!(service.delete(account.id, false).unwrap_err().is_validation());
        assert!(service.get(account.id).unwrap().is_some());

        assert_eq!(service.delete(account.id, true).unwrap(), 2);
        assert!(service.get(account.id).unwrap().is_none());
        assert_eq!(storage.entries.count().unwrap(), 0);

        // create + two entry deletes + account delete
        assert_eq!(storage.audit().read_all().unwrap().len(), 4);
    }

    #[test]
    fn test_list_with_summaries() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        let sbi = service.create("sbi").unwrap();
        service.create("axis").unwrap();
        add_record(&storage, &sbi, Month::March);
        add_record(&storage, &sbi, Month::May);

        let summaries = service.list_with_summaries().unwrap();
        assert_eq!(summaries[0].account.name, "AXIS");
        assert_eq!(summaries[0].entry_count, 0);
        assert!(summaries[0].latest_period.is_none());
        assert_eq!(summaries[1].entry_count, 2);
        assert_eq!(summaries[1].latest_period.as_deref(), Some("May 2024"));
    }
}
