//! Ledger entry CLI commands

use clap::Subcommand;

use crate::display::entry::{format_entry_details, format_entry_table};
use crate::engine::{sort_entries, SortState};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{EntryDraft, EntryField, Money, Month};
use crate::services::{AccountService, EntryService};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a month for an account
    Add {
        /// Account name
        account: String,
        /// Month name, e.g. "March" or "mar"
        month: String,
        /// Year (2000-2100)
        year: i32,
        /// Balance at the start of the month
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        starting: String,
        /// Balance now
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
        /// Credit outstanding now
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        credit: String,
        /// Create the account if it does not exist
        #[arg(long)]
        create_account: bool,
    },
    /// Change fields of an entry
    Edit {
        /// Entry ID (full or short form)
        id: String,
        #[arg(short, long)]
        account: Option<String>,
        #[arg(short, long)]
        month: Option<String>,
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long, allow_hyphen_values = true)]
        starting: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        credit: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID (full or short form)
        id: String,
    },
    /// Show one entry
    Show {
        /// Entry ID (full or short form)
        id: String,
    },
    /// List entries, newest first
    List {
        /// Only this account
        #[arg(short, long)]
        account: Option<String>,
    },
}

fn parse_amount(label: &str, raw: &str) -> SpendlogResult<Money> {
    Money::parse(raw).map_err(|e| SpendlogError::Validation(format!("Invalid {}: {}", label, e)))
}

fn parse_month(raw: &str) -> SpendlogResult<Month> {
    Month::parse(raw)
        .ok_or_else(|| SpendlogError::Validation(format!("Invalid month: '{}'", raw)))
}

/// Handle an entry command
pub fn handle_entry_command(storage: &Storage, cmd: EntryCommands) -> SpendlogResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            account,
            month,
            year,
            starting,
            balance,
            credit,
            create_account,
        } => {
            if create_account {
                AccountService::new(storage).get_or_create(&account)?;
            }

            let draft = EntryDraft::new(account, year)
                .with(EntryField::Month(parse_month(&month)?))
                .with(EntryField::StartingBalance(parse_amount("starting balance", &starting)?))
                .with(EntryField::CurrentBalance(parse_amount("current balance", &balance)?))
                .with(EntryField::CurrentCredit(parse_amount("current credit", &credit)?));

            let entry = service.add(&draft)?;
            println!("Added entry: {} {}", entry.account_name, entry.period_label());
            println!("  ID: {}", entry.id);
        }

        EntryCommands::Edit {
            id,
            account,
            month,
            year,
            starting,
            balance,
            credit,
        } => {
            let entry = service.resolve(&id)?;

            let mut fields = Vec::new();
            if let Some(account) = account {
                fields.push(EntryField::AccountName(account));
            }
            if let Some(month) = month {
                fields.push(EntryField::Month(parse_month(&month)?));
            }
            if let Some(year) = year {
                fields.push(EntryField::Year(year));
            }
            if let Some(raw) = starting {
                fields.push(EntryField::StartingBalance(parse_amount("starting balance", &raw)?));
            }
            if let Some(raw) = balance {
                fields.push(EntryField::CurrentBalance(parse_amount("current balance", &raw)?));
            }
            if let Some(raw) = credit {
                fields.push(EntryField::CurrentCredit(parse_amount("current credit", &raw)?));
            }

            if fields.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = service.edit(entry.id, fields)?;
            println!("Updated entry: {} {}", updated.account_name, updated.period_label());
        }

        EntryCommands::Delete { id } => {
            let entry = service.resolve(&id)?;
            let removed = service.delete(entry.id)?;
            println!("Deleted entry: {} {}", removed.account_name, removed.period_label());
        }

        EntryCommands::Show { id } => {
            let entry = service.resolve(&id)?;
            print!("{}", format_entry_details(&entry));
        }

        EntryCommands::List { account } => {
            let entries = match account {
                Some(account) => {
                    let found = AccountService::new(storage).require(&account)?;
                    service.list_for_account(found.id)?
                }
                None => service.list_all()?,
            };
            let newest_first = SortState {
                column: None,
                ..SortState::default()
            };
            let sorted = sort_entries(&entries, &newest_first);
            println!("{}", format_entry_table(&sorted, &newest_first));
        }
    }

    Ok(())
}
