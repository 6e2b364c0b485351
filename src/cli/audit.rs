//! `spendlog audit`: show recent changes from the audit log

use crate::error::SpendlogResult;
use crate::storage::Storage;

/// Print the last `count` audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, count: usize) -> SpendlogResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
