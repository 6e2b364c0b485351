//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod audit;
pub mod entry;
pub mod export;
pub mod summary;

pub use account::{handle_account_command, AccountCommands};
pub use audit::handle_audit_command;
pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use summary::{handle_summary_command, resolve_view, ResolvedView, SummaryArgs, ViewArgs};
