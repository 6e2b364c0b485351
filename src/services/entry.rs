//! Ledger entry service
//!
//! Adds, edits and deletes monthly entries and hands out the flattened
//! [`Entry`] rows the dashboard engine works on. An account has at most one
//! entry per month and year.

use std::collections::HashMap;

use chrono::Utc;

use crate::audit::EntityType;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Account, AccountId, Entry, EntryDraft, EntryField, EntryId, EntryRecord, Month};
use crate::storage::Storage;

/// Service for ledger entries
pub struct EntryService<'a> {
    storage: &'a Storage,
}

fn audit_label(account_name: &str, month: Month, year: i32) -> String {
    format!("{} {} {}", account_name, month, year)
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an entry from a completed form
    pub fn add(&self, draft: &EntryDraft) -> SpendlogResult<Entry> {
        let (account, month) = self.check_draft(draft, None)?;

        let record = EntryRecord::new(
            account.id,
            month,
            draft.year,
            draft.starting_balance,
            draft.current_balance,
            draft.current_credit,
        );

        self.storage.entries.upsert(record.clone())?;
        self.storage.entries.save()?;

        self.storage.log_create(
            EntityType::Entry,
            record.id.to_string(),
            Some(audit_label(&account.name, month, record.year)),
            &record,
        )?;

        Ok(Entry::from_record(&record, account.name))
    }

    /// Every entry across all accounts
    pub fn list_all(&self) -> SpendlogResult<Vec<Entry>> {
        let names: HashMap<AccountId, String> = self
            .storage
            .accounts
            .get_all()?
            .into_iter()
            .map(|a| (a.id, a.name))
            .collect();

        Ok(self
            .storage
            .entries
            .get_all()?
            .iter()
            .map(|record| {
                let name = names
                    .get(&record.account_id)
                    .cloned()
                    .unwrap_or_else(|| record.account_id.short());
                Entry::from_record(record, name)
            })
            .collect())
    }

    /// Entries of one account, newest first
    pub fn list_for_account(&self, account_id: AccountId) -> SpendlogResult<Vec<Entry>> {
        let account = self.account(account_id)?;
        Ok(self
            .storage
            .entries
            .get_by_account(account_id)?
            .iter()
            .map(|record| Entry::from_record(record, account.name.as_str()))
            .collect())
    }

    pub fn get(&self, id: EntryId) -> SpendlogResult<Option<Entry>> {
        let Some(record) = self.storage.entries.get(id)? else {
            return Ok(None);
        };
        let account = self.account(record.account_id)?;
        Ok(Some(Entry::from_record(&record, account.name)))
    }

    /// Find an entry by full id or by the short `ent-xxxxxxxx` form shown in tables
    pub fn resolve(&self, identifier: &str) -> SpendlogResult<Entry> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<EntryId>() {
            return self
                .get(id)?
                .ok_or_else(|| SpendlogError::entry_not_found(identifier));
        }

        let mut matches = self
            .list_all()?
            .into_iter()
            .filter(|e| e.id.short() == identifier || e.id.to_string().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (None, _) => Err(SpendlogError::entry_not_found(identifier)),
            (Some(_), Some(_)) => Err(SpendlogError::Validation(format!(
                "Entry id '{}' is ambiguous; use more characters",
                identifier
            ))),
        }
    }

    /// Apply field updates to an existing entry
    ///
    /// The updated entry is validated like a new one; moving it onto a period
    /// the account already has is a duplicate.
    pub fn edit(&self, id: EntryId, fields: Vec<EntryField>) -> SpendlogResult<Entry> {
        let before = self.record(id)?;
        let current = self.get(id)?.ok_or_else(|| SpendlogError::entry_not_found(id.to_string()))?;

        let mut draft = EntryDraft::from_entry(&current);
        for field in fields {
            draft.apply(field);
        }
        let (account, month) = self.check_draft(&draft, Some(id))?;

        let mut record = before.clone();
        record.account_id = account.id;
        record.month = month;
        record.year = draft.year;
        record.starting_balance = draft.starting_balance;
        record.current_balance = draft.current_balance;
        record.current_credit = draft.current_credit;
        record.updated_at = Utc::now();

        self.storage.entries.upsert(record.clone())?;
        self.storage.entries.save()?;

        self.storage.log_update(
            EntityType::Entry,
            record.id.to_string(),
            Some(audit_label(&account.name, month, record.year)),
            &before,
            &record,
        )?;

        Ok(Entry::from_record(&record, account.name))
    }

    /// Delete an entry, returning what was removed
    pub fn delete(&self, id: EntryId) -> SpendlogResult<Entry> {
        let entry = self.get(id)?.ok_or_else(|| SpendlogError::entry_not_found(id.to_string()))?;
        let record = self
            .storage
            .entries
            .delete(id)?
            .ok_or_else(|| SpendlogError::entry_not_found(id.to_string()))?;
        self.storage.entries.save()?;

        self.storage.log_delete(
            EntityType::Entry,
            record.id.to_string(),
            Some(audit_label(&entry.account_name, record.month, record.year)),
            &record,
        )?;

        Ok(entry)
    }

    /// Validate a form and resolve its account; `editing` is excluded from
    /// the duplicate check
    fn check_draft(
        &self,
        draft: &EntryDraft,
        editing: Option<EntryId>,
    ) -> SpendlogResult<(Account, Month)> {
        draft
            .validate()
            .map_err(|e| SpendlogError::Validation(e.to_string()))?;
        let month = draft
            .month
            .ok_or_else(|| SpendlogError::Validation("Month is required".into()))?;

        let account = self
            .storage
            .accounts
            .get_by_name(&draft.account_name)?
            .ok_or_else(|| SpendlogError::account_not_found(draft.account_name.trim().to_uppercase()))?;

        if let Some(existing) = self.storage.entries.find_period(account.id, month, draft.year)? {
            if Some(existing.id) != editing {
                return Err(SpendlogError::Duplicate {
                    entity_type: "Entry",
                    identifier: audit_label(&account.name, month, draft.year),
                });
            }
        }

        Ok((account, month))
    }

    fn account(&self, id: AccountId) -> SpendlogResult<Account> {
        self.storage
            .accounts
            .get(id)?
            .ok_or_else(|| SpendlogError::account_not_found(id.to_string()))
    }

    fn record(&self, id: EntryId) -> SpendlogResult<EntryRecord> {
        self.storage
            .entries
            .get(id)?
            .ok_or_else(|| SpendlogError::entry_not_found(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::SpendlogPaths;
    use crate::models::Money;
    use crate::services::AccountService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn draft(account: &str, month: Month, year: i32) -> EntryDraft {
        EntryDraft::new(account, year)
            .with(EntryField::Month(month))
            .with(EntryField::StartingBalance(Money::from_major(10_000)))
            .with(EntryField::CurrentBalance(Money::from_major(8_000)))
            .with(EntryField::CurrentCredit(Money::from_major(2_000)))
    }

    #[test]
    fn test_add_computes_derived_fields() {
        let (_temp_dir, storage) = create_test_storage();
        AccountService::new(&storage).create("sbi").unwrap();
        let service = EntryService::new(&storage);

        let entry = service.add(&draft("sbi", Month::March, 2024)).unwrap();
        assert_eq!(entry.account_name, "SBI");
        assert_eq!(entry.balance_after_credit, Money::from_major(6_000));
        assert_eq!(entry.total_spent, Money::from_major(4_000));
        assert_eq!(service.get(entry.id).unwrap().unwrap(), entry);
    }

    #[test]
    fn test_add_errors() {
        let (_temp_dir, storage) = create_test_storage();
        AccountService::new(&storage).create("sbi").unwrap();
        let service = EntryService::new(&storage);

        let err = service.add(&draft("hdfc", Month::March, 2024)).unwrap_err();
        assert!(err.is_not_found());

        let err = service.add(&draft("sbi", Month::March, 1999)).unwrap_err();
        assert!(err.is_validation());

        let err = service.add(&EntryDraft::new("sbi", 2024)).unwrap_err();
        assert!(err.is_validation());

        service.add(&draft("sbi", Month::March, 2024)).unwrap();
        let err = service.add(&draft("SBI", Month::March, 2024)).unwrap_err();
        assert!(matches!(err, SpendlogError::Duplicate { .. }));
        assert_eq!(storage.entries.count().unwrap(), 1);
    }

    #[test]
    fn test_list_for_account() {
        let (_temp_dir, storage) = create_test_storage();
        let accounts = AccountService::new(&storage);
        let sbi = accounts.create("sbi").unwrap();
        accounts.create("axis").unwrap();
        let service = EntryService::new(&storage);

        service.add(&draft("sbi", Month::January, 2024)).unwrap();
        service.add(&draft("sbi", Month::February, 2024)).unwrap();
        service.add(&draft("axis", Month::January, 2024)).unwrap();

        let entries = service.list_for_account(sbi.id).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.account_name == "SBI"));
        assert_eq!(service.list_all().unwrap().len(), 3);

        assert!(service.list_for_account(AccountId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_edit_applies_fields_and_audits_diff() {
        let (_temp_dir, storage) = create_test_storage();
        AccountService::new(&storage).create("sbi").unwrap();
        let service = EntryService::new(&storage);
        let entry = service.add(&draft("sbi", Month::March, 2024)).unwrap();

        let edited = service
            .edit(entry.id, vec![EntryField::CurrentCredit(Money::from_major(500))])
            .unwrap();
        assert_eq!(edited.id, entry.id);
        assert_eq!(edited.total_spent, Money::from_major(2_500));

        let logged = storage.audit().read_all().unwrap();
        let last = logged.last().unwrap();
        assert_eq!(last.operation, Operation::Update);
        assert_eq!(
            last.diff_summary.as_deref(),
            Some("current_credit: 200000 -> 50000")
        );
    }

    #[test]
    fn test_edit_keeps_period_unique() {
        let (_temp_dir, storage) = create_test_storage();
        let accounts = AccountService::new(&storage);
        accounts.create("sbi").unwrap();
        let axis = accounts.create("axis").unwrap();
        let service = EntryService::new(&storage);

        let march = service.add(&draft("sbi", Month::March, 2024)).unwrap();
        service.add(&draft("sbi", Month::April, 2024)).unwrap();

        // editing without moving is not a clash with itself
        service.edit(march.id, vec![EntryField::Year(2024)]).unwrap();

        let err = service.edit(march.id, vec![EntryField::Month(Month::April)]).unwrap_err();
        assert!(matches!(err, SpendlogError::Duplicate { .. }));

        let moved = service
            .edit(march.id, vec![EntryField::AccountName("Axis".into())])
            .unwrap();
        assert_eq!(moved.account_id, axis.id);
        assert_eq!(service.list_for_account(axis.id).unwrap().len(), 1);

        let err = service.edit(march.id, vec![EntryField::Year(2101)]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_resolve_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        AccountService::new(&storage).create("sbi").unwrap();
        let service = EntryService::new(&storage);
        let entry = service.add(&draft("sbi", Month::March, 2024)).unwrap();

        assert_eq!(service.resolve(&entry.id.short()).unwrap().id, entry.id);
        assert_eq!(service.resolve(&entry.id.to_string()).unwrap().id, entry.id);
        assert!(service.resolve("ent-zzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        AccountService::new(&storage).create("sbi").unwrap();
        let service = EntryService::new(&storage);
        let entry = service.add(&draft("sbi", Month::March, 2024)).unwrap();

        let removed = service.delete(entry.id).unwrap();
        assert_eq!(removed.id, entry.id);
        assert!(service.get(entry.id).unwrap().is_none());
        assert!(service.delete(entry.id).unwrap_err().is_not_found());
        assert!(service.edit(entry.id, vec![]).unwrap_err().is_not_found());
    }
}
