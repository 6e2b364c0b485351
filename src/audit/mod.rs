//! Audit trail for spendlog
//!
//! Every create, update and delete of an account or ledger entry is appended
//! to `audit.log` as one JSON object per line, with snapshots of the record
//! before and after the change. `spendlog audit` reads it back.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
