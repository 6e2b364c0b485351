//! Calendar month of a ledger entry
//!
//! Entries carry an English month name. The canonical order January..December
//! gives each month an index 0..=11 and that index is the only calendar
//! representation used when ordering entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in canonical order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based calendar index (January = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Month for a zero-based index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Full English name
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter abbreviation
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Parse a month name (full or three-letter, any case)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s.len() < 3 {
            return None;
        }
        Self::ALL.into_iter().find(|m| {
            let name = m.name().to_lowercase();
            name == s || (s.len() == 3 && name.starts_with(&s))
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s).ok_or_else(|| format!("Invalid month: '{}'", s))
    }
}
