//! Account repository backed by `data/accounts.json`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendlogError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Accounts keyed by id
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the in-memory accounts with what is on disk
    pub fn load(&self) -> Result<(), SpendlogError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for account in file_data.accounts {
            data.insert(account.id, account);
        }

        Ok(())
    }

    /// Write every account to disk, sorted by name
    pub fn save(&self) -> Result<(), SpendlogError> {
        let file_data = AccountData {
            accounts: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: AccountId) -> Result<Option<Account>, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All accounts sorted by name
    pub fn get_all(&self) -> Result<Vec<Account>, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut accounts: Vec<_> = data.values().cloned().collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }

    /// Look up an account by name, ignoring case and surrounding whitespace
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;

        let wanted = name.trim().to_lowercase();
        Ok(data
            .values()
            .find(|a| a.name.to_lowercase() == wanted)
            .cloned())
    }

    /// Insert or replace an account
    pub fn upsert(&self, account: Account) -> Result<(), SpendlogError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(account.id, account);
        Ok(())
    }

    /// Remove an account, returning it if it existed
    pub fn delete(&self, id: AccountId) -> Result<Option<Account>, SpendlogError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id))
    }

    /// Whether another account already uses this name
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<AccountId>,
    ) -> Result<bool, SpendlogError> {
        Ok(self
            .get_by_name(name)?
            .is_some_and(|a| Some(a.id) != exclude_id))
    }

    pub fn count(&self) -> Result<usize, SpendlogError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AccountRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = AccountRepository::new(temp_dir.path().join("accounts.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload_sorted_by_name() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(Account::new("sbi")).unwrap();
        repo.upsert(Account::new("axis")).unwrap();
        repo.save().unwrap();

        let reloaded = AccountRepository::new(temp_dir.path().join("accounts.json"));
        reloaded.load().unwrap();
        let names: Vec<_> = reloaded.get_all().unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["AXIS", "SBI"]);
    }

    #[test]
    fn test_get_by_name_ignores_case() {
        let (_temp_dir, repo) = create_test_repo();
        let account = Account::new("icici");
        repo.upsert(account.clone()).unwrap();

        assert_eq!(repo.get_by_name(" Icici ").unwrap().unwrap().id, account.id);
        assert!(repo.get_by_name("hdfc").unwrap().is_none());
    }

    #[test]
    fn test_name_exists_excludes_self() {
        let (_temp_dir, repo) = create_test_repo();
        let account = Account::new("HDFC");
        repo.upsert(account.clone()).unwrap();

        assert!(repo.name_exists("hdfc", None).unwrap());
        assert!(!repo.name_exists("hdfc", Some(account.id)).unwrap());
        assert!(!repo.name_exists("other", None).unwrap());
    }

    #[test]
    fn test_delete_returns_removed_account() {
        let (_temp_dir, repo) = create_test_repo();
        let account = Account::new("axis");
        repo.upsert(account.clone()).unwrap();

        assert_eq!(repo.delete(account.id).unwrap().unwrap().name, "AXIS");
        assert!(repo.delete(account.id).unwrap().is_none());
        assert!(repo.get(account.id).unwrap().is_none());
    }
}
