//! Account, month and year filters

use std::fmt;

use crate::models::{AccountId, Entry, Month};

/// Sentinel shown and persisted for "no month filter"
pub const ALL_MONTHS: &str = "All Months";
/// Sentinel shown and persisted for "no year filter"
pub const ALL_YEARS: &str = "All Years";

/// Month filter: every month, or one specific month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// Parse the sentinel (or "all") or a month name
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_MONTHS) || trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Month::parse(trimmed).map(Self::Only)
    }

    pub fn matches(&self, month: Month) -> bool {
        match self {
            Self::All => true,
            Self::Only(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_MONTHS),
            Self::Only(m) => write!(f, "{}", m),
        }
    }
}

/// Year filter: every year, or the year written in a string
///
/// The string is kept as given. A value that does not parse as a year is not
/// an error; it simply matches no entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Only(String),
}

impl YearFilter {
    /// Parse the sentinel (or "all"), anything else is taken verbatim
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_YEARS) || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    /// Filter on a specific year
    pub fn year(year: i32) -> Self {
        Self::Only(year.to_string())
    }

    /// The requested year, if one was given and it parses
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Only(raw) => raw.parse().ok(),
        }
    }

    pub fn matches(&self, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Only(_) => self.value() == Some(year),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_YEARS),
            Self::Only(raw) => f.write_str(raw),
        }
    }
}

/// The three dashboard filters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Restrict to one account; `None` keeps every account
    pub account: Option<AccountId>,
    pub month: MonthFilter,
    pub year: YearFilter,
}

impl FilterState {
    /// Filters for one account with both "All" sentinels
    pub fn for_account(account: Option<AccountId>) -> Self {
        Self {
            account,
            ..Self::default()
        }
    }

    /// Whether an entry passes all three filters
    pub fn matches(&self, entry: &Entry) -> bool {
        self.account.map_or(true, |id| entry.account_id == id)
            && self.month.matches(entry.month)
            && self.year.matches(entry.year)
    }
}

/// Keep the entries that pass the account, month and year filters
///
/// Input order is preserved.
pub fn filter(
    entries: &[Entry],
    account: Option<AccountId>,
    month: &MonthFilter,
    year: &YearFilter,
) -> Vec<Entry> {
    let state = FilterState {
        account,
        month: *month,
        year: year.clone(),
    };
    filter_entries(entries, &state)
}

/// [`filter`] taking the filters as one [`FilterState`]
pub fn filter_entries(entries: &[Entry], state: &FilterState) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| state.matches(entry))
        .cloned()
        .collect()
}
