//! Dashboard output: metric cards, trend lines, the ledger page and its footer

use crate::engine::{DashboardState, DashboardView, Metrics, Page, Trend};
use crate::models::Month;

use super::entry::format_entry_table;
use super::format_inr;

/// `▲ 50.0% from last month`; the arrow shows which way the value moved
pub fn format_trend(trend: Option<&Trend>) -> String {
    match trend {
        Some(trend) => format!(
            "{} {:.1}% from last month",
            if trend.rising { "▲" } else { "▼" },
            trend.pct_change.abs()
        ),
        None => "Latest month data".to_string(),
    }
}

/// The four metric cards, one per line with the trend underneath where present
pub fn format_metric_cards(metrics: &Metrics) -> String {
    let cards = [
        (
            "Current Balance (Last Month)",
            metrics.latest_balance,
            Some(format_trend(metrics.balance_trend.as_ref())),
        ),
        (
            "Current Credit (Last Month)",
            metrics.latest_credit,
            Some(format_trend(metrics.credit_trend.as_ref())),
        ),
        ("Total Spent", metrics.total_spent_filtered, None),
        ("Total Credit", metrics.total_credit_filtered, None),
    ];

    let mut output = String::new();
    for (title, amount, trend) in cards {
        output.push_str(&format!("{:<30} {:>18}\n", title, format_inr(amount)));
        if let Some(trend) = trend {
            output.push_str(&format!("  {}\n", trend));
        }
    }
    output
}

/// `Showing 11-20 of 24 entries | Page 2 of 3 | 10 per page`
pub fn format_page_footer(page: &Page) -> String {
    format!(
        "Showing {}-{} of {} entries | Page {} of {} | {} per page",
        page.first_row(),
        page.last_row(),
        page.total_rows,
        page.page,
        page.total_pages,
        page.page_size
    )
}

/// The values worth passing to `--year` and `--month` for this scope
pub fn format_filter_options(years: &[i32], months: &[Month]) -> String {
    if years.is_empty() {
        return String::new();
    }
    let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    let months: Vec<&str> = months.iter().map(|m| m.short_name()).collect();
    format!("Years: {} | Months: {}", years.join(", "), months.join(", "))
}

/// Full dashboard: filter line, cards, table and footer
pub fn format_dashboard(account_name: Option<&str>, state: &DashboardState, view: &DashboardView) -> String {
    let mut output = format!(
        "Account: {} | Month: {} | Year: {}\n\n",
        account_name.unwrap_or("All Accounts"),
        state.filter.month,
        state.filter.year
    );
    output.push_str(&format_metric_cards(&view.metrics));
    output.push('\n');
    output.push_str(&format_entry_table(&view.page.rows, &state.sort));
    output.push('\n');
    if !view.page.rows.is_empty() {
        output.push_str(&format_page_footer(&view.page));
        output.push('\n');
    }
    output
}
