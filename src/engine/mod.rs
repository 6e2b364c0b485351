//! Dashboard engine
//!
//! Pure functions that turn the entries loaded for an account (the *scope*)
//! plus the current filter, sort and page state into what the dashboard
//! shows: one page of sorted rows, the metric cards and the trend arrows.
//! Nothing here touches storage; callers fetch the scope first and persist
//! preferences afterwards.
//!
//! The steps are exposed individually ([`filter`], [`sort`],
//! [`compute_metrics`], [`paginate`]) and composed by [`render`].

pub mod filter;
pub mod metrics;
pub mod paginate;
pub mod sort;
pub mod state;

pub use filter::{filter, filter_entries, FilterState, MonthFilter, YearFilter, ALL_MONTHS, ALL_YEARS};
pub use metrics::{compute_metrics, Metrics, Trend};
pub use paginate::{paginate, total_pages, Page, PageSize};
pub use sort::{default_order, sort, sort_entries, SortColumn, SortDirection, SortState};
pub use state::{DashboardState, PageState, ViewAction};

use crate::models::{Entry, Month};

/// Everything needed to draw the dashboard once
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Number of entries left after filtering (all pages)
    pub filtered_count: usize,
    pub page: Page,
    pub metrics: Metrics,
}

/// Filter and sort a scope without paginating
pub fn selection(scope: &[Entry], state: &DashboardState) -> Vec<Entry> {
    let filtered = filter_entries(scope, &state.filter);
    sort_entries(&filtered, &state.sort)
}

/// Run the whole pipeline: filter, sort, metrics, paginate
///
/// Metrics are computed from the scope and the filtered set, never from the
/// page slice.
pub fn render(scope: &[Entry], state: &DashboardState) -> DashboardView {
    let filtered = filter_entries(scope, &state.filter);
    let metrics = compute_metrics(scope, &filtered);
    let sorted = sort_entries(&filtered, &state.sort);
    let page = paginate(&sorted, state.page.page, state.page.page_size);

    DashboardView {
        filtered_count: sorted.len(),
        page,
        metrics,
    }
}

/// Page count for the current filters, used to bound navigation
pub fn page_count(scope: &[Entry], state: &DashboardState) -> usize {
    let matching = scope.iter().filter(|e| state.filter.matches(e)).count();
    total_pages(matching, state.page.page_size)
}

/// Distinct years present in the scope, newest first
pub fn available_years(scope: &[Entry]) -> Vec<i32> {
    let mut years: Vec<i32> = scope.iter().map(|e| e.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Distinct months present in the scope, in calendar order
pub fn available_months(scope: &[Entry]) -> Vec<Month> {
    Month::ALL
        .into_iter()
        .filter(|m| scope.iter().any(|e| e.month == *m))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{AccountId, Entry, EntryId, Money, Month};

    /// Build an entry from whole-rupee figures; starting balance is derived
    /// so that `total_spent` is consistent with the other columns.
    pub fn entry(
        account_id: AccountId,
        month: Month,
        year: i32,
        balance: i64,
        credit: i64,
        spent: i64,
    ) -> Entry {
        let current_balance = Money::from_major(balance);
        let current_credit = Money::from_major(credit);
        let total_spent = Money::from_major(spent);
        Entry {
            id: EntryId::new(),
            account_id,
            account_name: "TEST".to_string(),
            month,
            year,
            starting_balance: total_spent + current_balance - current_credit,
            current_balance,
            current_credit,
            balance_after_credit: current_balance - current_credit,
            total_spent,
        }
    }

    pub fn named_entry(name: &str, month: Month, year: i32) -> Entry {
        let mut e = entry(AccountId::new(), month, year, 0, 0, 0);
        e.account_name = name.to_string();
        e
    }
}
