//! Account CLI commands

use clap::Subcommand;

use crate::display::account::{format_account_details, format_account_list};
use crate::error::SpendlogResult;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account (names are stored upper-case)
    Create {
        /// Account name, e.g. "icici"
        name: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Rename an account
    Rename {
        /// Account name or ID
        account: String,
        /// New name
        name: String,
    },
    /// Delete an account
    Delete {
        /// Account name or ID
        account: String,
        /// Also delete the account's entries
        #[arg(long)]
        cascade: bool,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> SpendlogResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Create { name } => {
            let account = service.create(&name)?;
            println!("Created account: {}", account.name);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let summaries = service.list_with_summaries()?;
            println!("{}", format_account_list(&summaries));
        }

        AccountCommands::Show { account } => {
            let found = service.require(&account)?;
            print!("{}", format_account_details(&found));
        }

        AccountCommands::Rename { account, name } => {
            let found = service.require(&account)?;
            let renamed = service.rename(found.id, &name)?;
            println!("Renamed account: {} -> {}", found.name, renamed.name);
        }

        AccountCommands::Delete { account, cascade } => {
            let found = service.require(&account)?;
            let removed = service.delete(found.id, cascade)?;
            if removed > 0 {
                println!("Deleted account: {} ({} entries removed)", found.name, removed);
            } else {
                println!("Deleted account: {}", found.name);
            }
        }
    }

    Ok(())
}
