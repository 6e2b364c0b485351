//! Core data models for spendlog
//!
//! Accounts, monthly ledger entries and the value types they are built from.

pub mod account;
pub mod entry;
pub mod ids;
pub mod money;
pub mod month;

pub use account::Account;
pub use entry::{Entry, EntryDraft, EntryField, EntryRecord};
pub use ids::{AccountId, EntryId};
pub use money::Money;
pub use month::Month;
