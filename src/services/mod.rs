//! Service layer for spendlog
//!
//! Validation, uniqueness rules and audit logging on top of the storage
//! layer. Services borrow a [`Storage`](crate::storage::Storage) and are
//! cheap to create per command.

pub mod account;
pub mod entry;

pub use account::{AccountService, AccountSummary};
pub use entry::EntryService;
