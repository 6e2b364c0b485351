//! The dashboard: `spendlog summary`
//!
//! Filters are restored from the preference store, command-line flags are
//! applied on top as view actions (so the usual resets happen), and the
//! resulting filters are saved for the next run.

use clap::Args;

use crate::config::{FilterPreferences, PreferenceStore, Settings};
use crate::display::{format_dashboard, format_filter_options};
use crate::engine::{
    available_months, available_years, page_count, render, DashboardState, MonthFilter, PageSize,
    SortColumn, SortDirection, ViewAction, YearFilter,
};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Account, Entry};
use crate::services::{AccountService, EntryService};
use crate::storage::Storage;

/// Filter and sort flags shared by `summary` and `export`
#[derive(Args, Debug, Default)]
pub struct ViewArgs {
    /// Account name or ID, or "all"
    #[arg(short, long)]
    pub account: Option<String>,

    /// Month name, or "all"
    #[arg(short, long)]
    pub month: Option<String>,

    /// Year, or "all"
    #[arg(short, long)]
    pub year: Option<String>,

    /// Column to sort by
    #[arg(short, long)]
    pub sort: Option<SortColumn>,

    /// Sort descending
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Sort ascending
    #[arg(long)]
    pub asc: bool,
}

/// Flags for `spendlog summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Page to show (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page: 10, 25, 50 or 100
    #[arg(long)]
    pub page_size: Option<PageSize>,
}

/// Dashboard state after restoring preferences and applying the flags,
/// with the entries in scope and the active account
pub struct ResolvedView {
    pub state: DashboardState,
    pub scope: Vec<Entry>,
    pub account: Option<Account>,
}

/// Restore filters and apply the view flags
pub fn resolve_view(
    storage: &Storage,
    prefs: &dyn PreferenceStore,
    page_size: PageSize,
    args: &ViewArgs,
) -> SpendlogResult<ResolvedView> {
    let accounts = AccountService::new(storage);
    let restored = FilterPreferences::restore(prefs, &accounts.list()?);
    let mut state = DashboardState::new(restored, page_size);

    if let Some(raw) = &args.account {
        let selected = if raw.trim().eq_ignore_ascii_case("all") {
            None
        } else {
            Some(accounts.require(raw)?.id)
        };
        state.apply(ViewAction::SelectAccount(selected), 1);
    }

    if let Some(raw) = &args.month {
        let month = MonthFilter::parse(raw)
            .ok_or_else(|| SpendlogError::Validation(format!("Invalid month: '{}'", raw)))?;
        state.apply(ViewAction::SelectMonth(month), 1);
    }

    if let Some(raw) = &args.year {
        state.apply(ViewAction::SelectYear(YearFilter::parse(raw)), 1);
    }

    let wanted = if args.desc {
        Some(SortDirection::Desc)
    } else if args.asc {
        Some(SortDirection::Asc)
    } else {
        None
    };
    let column = args.sort.or(state.sort.column);
    if let Some(column) = column {
        if args.sort.is_some() {
            state.apply(ViewAction::SortBy(column), 1);
        }
        if wanted.is_some_and(|d| d != state.sort.direction) {
            state.apply(ViewAction::SortBy(column), 1);
        }
    }

    let entries = EntryService::new(storage);
    let (scope, account) = match state.filter.account {
        Some(id) => (entries.list_for_account(id)?, accounts.get(id)?),
        None => (entries.list_all()?, None),
    };

    Ok(ResolvedView {
        state,
        scope,
        account,
    })
}

/// Handle `spendlog summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    prefs: &mut dyn PreferenceStore,
    args: SummaryArgs,
) -> SpendlogResult<()> {
    let page_size = args.page_size.unwrap_or(settings.default_page_size);
    let ResolvedView {
        mut state,
        scope,
        account,
    } = resolve_view(storage, &*prefs, page_size, &args.view)?;

    if let Some(page) = args.page {
        let total = page_count(&scope, &state);
        let action = if page > total {
            ViewAction::LastPage
        } else {
            ViewAction::GoToPage(page)
        };
        state.apply(action, total);
    }

    FilterPreferences::persist(prefs, &state.filter)?;

    let view = render(&scope, &state);
    print!(
        "{}",
        format_dashboard(account.as_ref().map(|a| a.name.as_str()), &state, &view)
    );

    let options = format_filter_options(&available_years(&scope), &available_months(&scope));
    if !options.is_empty() {
        println!("{}", options);
    }
    Ok(())
}
