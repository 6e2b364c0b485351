//! Account model
//!
//! A spending account (a bank or card) that owns one ledger entry per month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;

/// Longest accepted account name
pub const MAX_ACCOUNT_NAME_LEN: usize = 100;

/// A spending account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name, stored upper-case (e.g., "ICICI")
    pub name: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account; the name is trimmed and upper-cased
    pub fn new(name: impl AsRef<str>) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: normalize_name(name.as_ref()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename this account
    pub fn rename(&mut self, name: impl AsRef<str>) {
        self.name = normalize_name(name.as_ref());
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_ACCOUNT_NAME_LEN {
            return Err(AccountValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

/// Account names are stored trimmed and upper-case
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Account name too long ({} chars, max {})",
                len, MAX_ACCOUNT_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for AccountValidationError {}
