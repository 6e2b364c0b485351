use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_account_command, handle_audit_command, handle_entry_command, handle_export_command,
    handle_summary_command, AccountCommands, EntryCommands, ExportArgs, SummaryArgs,
};
use spendlog::config::{paths::SpendlogPaths, settings::Settings, JsonPreferenceStore};
use spendlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Monthly spending ledger with a filterable dashboard",
    long_about = "spendlog keeps one entry per account per month: the balance the month \
                  started with, the balance now and the credit outstanding. The summary \
                  dashboard filters, sorts and pages through the ledger and shows the \
                  latest balance, credit and spending trends."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, env = "SPENDLOG_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Ledger entry commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Show the dashboard: metric cards and one page of entries
    #[command(alias = "dash")]
    Summary(SummaryArgs),

    /// Export the filtered entries to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes
    Audit {
        /// Number of changes to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => SpendlogPaths::with_base_dir(dir),
        None => SpendlogPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command.unwrap_or(Commands::Summary(SummaryArgs::default())) {
        Commands::Init => {
            println!("Initializing spendlog at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.setup_completed = true;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  spendlog account create <name>");
            println!("  spendlog entry add <account> <month> <year> -s <starting> -b <balance> -c <credit>");
            println!("  spendlog summary");
        }
        Commands::Config => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Preferences file: {}", paths.preferences_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:          INR (₹)");
            println!("  Default page size: {}", settings.default_page_size);
            println!("  Initialized:       {}", settings.setup_completed);
        }
        Commands::Account(cmd) => handle_account_command(&storage, cmd)?,
        Commands::Entry(cmd) => handle_entry_command(&storage, cmd)?,
        Commands::Summary(args) => {
            let mut prefs = JsonPreferenceStore::open(paths.preferences_file())?;
            handle_summary_command(&storage, &settings, &mut prefs, args)?;
        }
        Commands::Export(args) => {
            let prefs = JsonPreferenceStore::open(paths.preferences_file())?;
            handle_export_command(&storage, &settings, &prefs, args)?;
        }
        Commands::Audit { count } => handle_audit_command(&storage, count)?,
    }

    Ok(())
}
