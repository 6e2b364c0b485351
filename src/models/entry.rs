//! Ledger entry models
//!
//! An entry is one month's snapshot of a spending account: the balance the
//! month started with, the balance and outstanding credit at the time of
//! recording, and two derived figures.
//!
//! Three shapes exist:
//! - [`EntryRecord`] is what storage keeps (references the account by id).
//! - [`Entry`] is the flattened row handed to the dashboard engine, with the
//!   account name and the derived fields filled in.
//! - [`EntryDraft`] is the editable form, updated one [`EntryField`] at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::normalize_name;
use super::ids::{AccountId, EntryId};
use super::money::Money;
use super::month::Month;

/// Earliest year accepted when creating or editing an entry
pub const MIN_YEAR: i32 = 2000;
/// Latest year accepted when creating or editing an entry
pub const MAX_YEAR: i32 = 2100;

/// A stored ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: EntryId,
    pub account_id: AccountId,
    pub month: Month,
    pub year: i32,
    pub starting_balance: Money,
    pub current_balance: Money,
    pub current_credit: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntryRecord {
    /// Create a new record for an account
    pub fn new(
        account_id: AccountId,
        month: Month,
        year: i32,
        starting_balance: Money,
        current_balance: Money,
        current_credit: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(),
            account_id,
            month,
            year,
            starting_balance,
            current_balance,
            current_credit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current balance minus outstanding credit
    pub fn balance_after_credit(&self) -> Money {
        self.current_balance - self.current_credit
    }

    /// Money that left the account during the month, including what went on credit
    pub fn total_spent(&self) -> Money {
        (self.starting_balance - self.current_balance) + self.current_credit
    }

    /// True when this record covers the given account and month
    pub fn covers(&self, account_id: AccountId, month: Month, year: i32) -> bool {
        self.account_id == account_id && self.month == month && self.year == year
    }
}

/// A flattened ledger row, the unit the dashboard engine works on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub account_id: AccountId,
    pub account_name: String,
    pub month: Month,
    pub year: i32,
    pub starting_balance: Money,
    pub current_balance: Money,
    pub current_credit: Money,
    pub balance_after_credit: Money,
    pub total_spent: Money,
}

impl Entry {
    /// Flatten a stored record, resolving the account name and derived fields
    pub fn from_record(record: &EntryRecord, account_name: impl Into<String>) -> Self {
        Self {
            id: record.id,
            account_id: record.account_id,
            account_name: account_name.into(),
            month: record.month,
            year: record.year,
            starting_balance: record.starting_balance,
            current_balance: record.current_balance,
            current_credit: record.current_credit,
            balance_after_credit: record.balance_after_credit(),
            total_spent: record.total_spent(),
        }
    }

    /// "March 2025"
    pub fn period_label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// One field of the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryField {
    AccountName(String),
    Month(Month),
    Year(i32),
    StartingBalance(Money),
    CurrentBalance(Money),
    CurrentCredit(Money),
}

/// The editable form behind "add entry" and "edit entry"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryDraft {
    pub account_name: String,
    pub month: Option<Month>,
    pub year: i32,
    pub starting_balance: Money,
    pub current_balance: Money,
    pub current_credit: Money,
}

impl EntryDraft {
    /// Start a form for the given account and year with zero amounts
    pub fn new(account_name: impl Into<String>, year: i32) -> Self {
        Self {
            account_name: account_name.into(),
            year,
            ..Self::default()
        }
    }

    /// Prefill a form from an existing entry
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            account_name: entry.account_name.clone(),
            month: Some(entry.month),
            year: entry.year,
            starting_balance: entry.starting_balance,
            current_balance: entry.current_balance,
            current_credit: entry.current_credit,
        }
    }

    /// Apply a single field update
    pub fn apply(&mut self, field: EntryField) {
        match field {
            EntryField::AccountName(name) => self.account_name = name,
            EntryField::Month(month) => self.month = Some(month),
            EntryField::Year(year) => self.year = year,
            EntryField::StartingBalance(amount) => self.starting_balance = amount,
            EntryField::CurrentBalance(amount) => self.current_balance = amount,
            EntryField::CurrentCredit(amount) => self.current_credit = amount,
        }
    }

    /// Builder-style [`apply`](Self::apply)
    pub fn with(mut self, field: EntryField) -> Self {
        self.apply(field);
        self
    }

    /// Check required fields and the year range
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if normalize_name(&self.account_name).is_empty() {
            return Err(EntryValidationError::MissingAccount);
        }
        if self.month.is_none() {
            return Err(EntryValidationError::MissingMonth);
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(EntryValidationError::YearOutOfRange(self.year));
        }
        Ok(())
    }
}

/// Validation errors for entry forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingAccount,
    MissingMonth,
    YearOutOfRange(i32),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAccount => write!(f, "Account is required"),
            Self::MissingMonth => write!(f, "Month is required"),
            Self::YearOutOfRange(year) => write!(
                f,
                "Year must be between {} and {} (got {})",
                MIN_YEAR, MAX_YEAR, year
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}
