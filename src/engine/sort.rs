//! Column sorting and the default chronological ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Entry;

/// A sortable column of the ledger table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    AccountName,
    Month,
    Year,
    StartingBalance,
    CurrentBalance,
    CurrentCredit,
    BalanceAfterCredit,
    TotalSpent,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::AccountName,
        SortColumn::Month,
        SortColumn::Year,
        SortColumn::StartingBalance,
        SortColumn::CurrentBalance,
        SortColumn::CurrentCredit,
        SortColumn::BalanceAfterCredit,
        SortColumn::TotalSpent,
    ];

    /// Machine name used on the command line and in preferences
    pub fn key(&self) -> &'static str {
        match self {
            Self::AccountName => "account",
            Self::Month => "month",
            Self::Year => "year",
            Self::StartingBalance => "starting-balance",
            Self::CurrentBalance => "current-balance",
            Self::CurrentCredit => "current-credit",
            Self::BalanceAfterCredit => "balance-after-credit",
            Self::TotalSpent => "total-spent",
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            Self::AccountName => "Account",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::StartingBalance => "Starting Balance",
            Self::CurrentBalance => "Current Balance",
            Self::CurrentCredit => "Current Credit",
            Self::BalanceAfterCredit => "Balance After Credit",
            Self::TotalSpent => "Total Spent",
        }
    }

    /// Ascending comparison of two entries on this column
    ///
    /// Months compare by calendar index, never by name.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            Self::AccountName => locale_cmp(&a.account_name, &b.account_name),
            Self::Month => a.month.index().cmp(&b.month.index()),
            Self::Year => a.year.cmp(&b.year),
            Self::StartingBalance => a.starting_balance.cmp(&b.starting_balance),
            Self::CurrentBalance => a.current_balance.cmp(&b.current_balance),
            Self::CurrentCredit => a.current_credit.cmp(&b.current_credit),
            Self::BalanceAfterCredit => a.balance_after_credit.cmp(&b.balance_after_credit),
            Self::TotalSpent => a.total_spent.cmp(&b.total_spent),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.key() == wanted || (wanted == "account-name" && *c == Self::AccountName))
            .ok_or_else(|| {
                let keys: Vec<_> = Self::ALL.iter().map(|c| c.key()).collect();
                format!("Invalid sort column '{}'. Valid columns: {}", s, keys.join(", "))
            })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Which column the table is sorted by; `column: None` means the default ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: Some(SortColumn::Year),
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Header click: the same column flips direction, a new column starts ascending
    ///
    /// Returns true when the column changed.
    pub fn click(&mut self, column: SortColumn) -> bool {
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
            false
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
            true
        }
    }
}

/// Alphabetical ignoring case; names differing only in case put lowercase first
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Newest first: year descending, then month index descending
pub fn default_order(a: &Entry, b: &Entry) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| b.month.index().cmp(&a.month.index()))
}

/// Sort entries by a column, or by [`default_order`] when no column is given
///
/// The sort is stable: ties keep their input order. The direction only
/// applies to an explicit column.
pub fn sort(entries: &[Entry], column: Option<SortColumn>, direction: SortDirection) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    match column {
        None => sorted.sort_by(default_order),
        Some(column) => sorted.sort_by(|a, b| direction.apply(column.compare(a, b))),
    }
    sorted
}

/// [`sort`] taking a [`SortState`]
pub fn sort_entries(entries: &[Entry], state: &SortState) -> Vec<Entry> {
    sort(entries, state.column, state.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{entry, named_entry};
    use crate::models::{AccountId, Month};

    fn months(entries: &[Entry]) -> Vec<Month> {
        entries.iter().map(|e| e.month).collect()
    }

    #[test]
    fn test_month_sort_is_chronological() {
        let a = AccountId::new();
        let entries = vec![
            entry(a, Month::April, 2024, 0, 0, 0),
            entry(a, Month::December, 2024, 0, 0, 0),
            entry(a, Month::August, 2024, 0, 0, 0),
            entry(a, Month::February, 2024, 0, 0, 0),
            entry(a, Month::January, 2024, 0, 0, 0),
        ];

        let asc = sort(&entries, Some(SortColumn::Month), SortDirection::Asc);
        assert_eq!(
            months(&asc),
            vec![
                Month::January,
                Month::February,
                Month::April,
                Month::August,
                Month::December
            ]
        );

        let desc = sort(&entries, Some(SortColumn::Month), SortDirection::Desc);
        assert_eq!(
            months(&desc),
            vec![
                Month::December,
                Month::August,
                Month::April,
                Month::February,
                Month::January
            ]
        );
    }

    #[test]
    fn test_month_sort_matches_index_sort() {
        let a = AccountId::new();
        let entries: Vec<_> = [7usize, 3, 11, 0, 5, 3, 9]
            .iter()
            .map(|&i| entry(a, Month::ALL[i], 2024, i as i64, 0, 0))
            .collect();

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let by_month = sort(&entries, Some(SortColumn::Month), direction);
            let mut by_index = entries.clone();
            by_index.sort_by(|x, y| direction.apply(x.month.index().cmp(&y.month.index())));
            assert_eq!(by_month, by_index);
        }
    }

    #[test]
    fn test_default_order_is_year_then_month_desc() {
        let a = AccountId::new();
        let entries = vec![
            entry(a, Month::January, 2024, 1, 0, 0),
            entry(a, Month::November, 2023, 2, 0, 0),
            entry(a, Month::February, 2024, 3, 0, 0),
            entry(a, Month::March, 2022, 4, 0, 0),
        ];

        let default_sorted = sort(&entries, None, SortDirection::Asc);
        let labels: Vec<_> = default_sorted.iter().map(|e| e.period_label()).collect();
        assert_eq!(
            labels,
            vec!["February 2024", "January 2024", "November 2023", "March 2022"]
        );

        // direction is ignored for the default ordering
        assert_eq!(sort(&entries, None, SortDirection::Desc), default_sorted);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = AccountId::new();
        let first = entry(a, Month::May, 2024, 10, 0, 0);
        let second = entry(a, Month::June, 2024, 10, 0, 0);
        let third = entry(a, Month::July, 2024, 5, 0, 0);
        let entries = vec![first.clone(), second.clone(), third.clone()];

        let asc = sort(&entries, Some(SortColumn::CurrentBalance), SortDirection::Asc);
        assert_eq!(asc, vec![third.clone(), first.clone(), second.clone()]);

        let desc = sort(&entries, Some(SortColumn::CurrentBalance), SortDirection::Desc);
        assert_eq!(desc, vec![first, second, third]);
    }

    #[test]
    fn test_account_name_sort_is_alphabetical() {
        let entries = vec![
            named_entry("icici", Month::May, 2024),
            named_entry("SBI", Month::May, 2024),
            named_entry("AXIS", Month::May, 2024),
            named_entry("axis", Month::May, 2024),
        ];

        let sorted = sort(&entries, Some(SortColumn::AccountName), SortDirection::Asc);
        let names: Vec<_> = sorted.iter().map(|e| e.account_name.as_str()).collect();
        assert_eq!(names, vec!["axis", "AXIS", "icici", "SBI"]);

        let sorted = sort(&entries, Some(SortColumn::AccountName), SortDirection::Desc);
        let names: Vec<_> = sorted.iter().map(|e| e.account_name.as_str()).collect();
        assert_eq!(names, vec!["SBI", "icici", "AXIS", "axis"]);
    }

    #[test]
    fn test_click_toggles_or_resets() {
        let mut state = SortState::default();
        assert_eq!(state.column, Some(SortColumn::Year));
        assert_eq!(state.direction, SortDirection::Desc);

        assert!(!state.click(SortColumn::Year));
        assert_eq!(state.direction, SortDirection::Asc);

        assert!(state.click(SortColumn::TotalSpent));
        assert_eq!(state.column, Some(SortColumn::TotalSpent));
        assert_eq!(state.direction, SortDirection::Asc);

        state.click(SortColumn::TotalSpent);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("month".parse::<SortColumn>(), Ok(SortColumn::Month));
        assert_eq!("total_spent".parse::<SortColumn>(), Ok(SortColumn::TotalSpent));
        assert_eq!("Account-Name".parse::<SortColumn>(), Ok(SortColumn::AccountName));
        assert!("balance".parse::<SortColumn>().is_err());
    }
}
