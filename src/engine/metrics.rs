//! Dashboard metrics and month-over-month trend indicators

use serde::Serialize;

use crate::models::{Entry, Money};

use super::sort::default_order;

/// Change between the two most recent entries of a scope
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    /// `(latest - previous) / previous * 100`, or 0 when previous is zero
    pub pct_change: f64,
    /// Whether the change is good news for the account holder
    pub is_positive: bool,
    /// Whether the value went up; `pct_change` is 0 when previous is zero,
    /// so the direction is kept separately
    pub rising: bool,
}

/// The four dashboard figures and two trends
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Metrics {
    /// Current balance of the most recent entry in scope
    pub latest_balance: Money,
    /// Current credit of the most recent entry in scope
    pub latest_credit: Money,
    /// Total spent across the filtered entries
    pub total_spent_filtered: Money,
    /// Current credit summed across the filtered entries
    pub total_credit_filtered: Money,
    /// A rising balance is positive
    pub balance_trend: Option<Trend>,
    /// A falling credit is positive
    pub credit_trend: Option<Trend>,
}

/// Percentage change from `previous` to `latest`
pub fn percent_change(latest: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        return 0.0;
    }
    (latest - previous).as_f64() / previous.as_f64() * 100.0
}

/// Trend for a figure where an increase is an improvement (balances)
pub fn rising_trend(latest: Money, previous: Money) -> Trend {
    Trend {
        pct_change: percent_change(latest, previous),
        is_positive: latest > previous,
        rising: latest > previous,
    }
}

/// Trend for a figure where a decrease is an improvement (credit owed)
pub fn falling_trend(latest: Money, previous: Money) -> Trend {
    Trend {
        pct_change: percent_change(latest, previous),
        is_positive: latest < previous,
        rising: latest > previous,
    }
}

/// Compute the dashboard metrics
///
/// `scope` is every entry loaded for the active account, before filtering;
/// the latest figures and both trends come from it. `filtered` only feeds the
/// two totals.
pub fn compute_metrics(scope: &[Entry], filtered: &[Entry]) -> Metrics {
    let mut newest_first: Vec<&Entry> = scope.iter().collect();
    newest_first.sort_by(|a, b| default_order(a, b));

    let latest = newest_first.first();
    let previous = newest_first.get(1);

    let (balance_trend, credit_trend) = match (latest, previous) {
        (Some(latest), Some(previous)) => (
            Some(rising_trend(latest.current_balance, previous.current_balance)),
            Some(falling_trend(latest.current_credit, previous.current_credit)),
        ),
        _ => (None, None),
    };

    Metrics {
        latest_balance: latest.map(|e| e.current_balance).unwrap_or_default(),
        latest_credit: latest.map(|e| e.current_credit).unwrap_or_default(),
        total_spent_filtered: filtered.iter().map(|e| e.total_spent).sum(),
        total_credit_filtered: filtered.iter().map(|e| e.current_credit).sum(),
        balance_trend,
        credit_trend,
    }
}
