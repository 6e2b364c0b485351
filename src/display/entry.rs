//! Ledger table formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::engine::{SortColumn, SortDirection, SortState};
use crate::models::Entry;

use super::format_inr;

fn header(column: SortColumn, sort: &SortState) -> String {
    if sort.column != Some(column) {
        return column.label().to_string();
    }
    let arrow = match sort.direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    };
    format!("{} {}", column.label(), arrow)
}

/// Ledger rows as a table, the sorted column marked with its direction
pub fn format_entry_table(entries: &[Entry], sort: &SortState) -> String {
    if entries.is_empty() {
        return "No entries match the current filters.".to_string();
    }

    let mut builder = Builder::default();
    let mut headers: Vec<String> = SortColumn::ALL.iter().map(|c| header(*c, sort)).collect();
    headers.push("ID".to_string());
    builder.push_record(headers);

    for entry in entries {
        builder.push_record([
            entry.account_name.clone(),
            entry.month.to_string(),
            entry.year.to_string(),
            format_inr(entry.starting_balance),
            format_inr(entry.current_balance),
            format_inr(entry.current_credit),
            format_inr(entry.balance_after_credit),
            format_inr(entry.total_spent),
            entry.id.short(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..8)).with(Alignment::right()));
    table.to_string()
}

/// One entry, field per line
pub fn format_entry_details(entry: &Entry) -> String {
    let mut output = String::new();
    output.push_str(&format!("Entry:                {}\n", entry.id));
    output.push_str(&format!("Account:              {}\n", entry.account_name));
    output.push_str(&format!("Period:               {}\n", entry.period_label()));
    output.push_str(&format!("Starting Balance:     {}\n", format_inr(entry.starting_balance)));
    output.push_str(&format!("Current Balance:      {}\n", format_inr(entry.current_balance)));
    output.push_str(&format!("Current Credit:       {}\n", format_inr(entry.current_credit)));
    output.push_str(&format!("Balance After Credit: {}\n", format_inr(entry.balance_after_credit)));
    output.push_str(&format!("Total Spent:          {}\n", format_inr(entry.total_spent)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::entry;
    use crate::models::{AccountId, Month};

    #[test]
    fn test_empty_state() {
        let output = format_entry_table(&[], &SortState::default());
        assert_eq!(output, "No entries match the current filters.");
    }

    #[test]
    fn test_table_marks_sorted_column() {
        let rows = vec![entry(AccountId::new(), Month::March, 2024, 123_456, 0, 10)];

        let output = format_entry_table(&rows, &SortState::default());
        assert!(output.contains("Year ▼"));
        assert!(output.contains("₹1,23,456.00"));
        assert!(output.contains("March"));

        let sort = SortState {
            column: Some(SortColumn::TotalSpent),
            direction: SortDirection::Asc,
        };
        let output = format_entry_table(&rows, &sort);
        assert!(output.contains("Total Spent ▲"));
        assert!(!output.contains("Year ▼"));
    }

    #[test]
    fn test_details() {
        let e = entry(AccountId::new(), Month::July, 2025, 500, 100, 250);
        let output = format_entry_details(&e);
        assert!(output.contains("Period:               July 2025"));
        assert!(output.contains("Balance After Credit: ₹400.00"));
        assert!(output.contains("Total Spent:          ₹250.00"));
    }
}
