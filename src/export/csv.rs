//! CSV export of ledger entries

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Entry, Money};

const HEADER: [&str; 9] = [
    "Account",
    "Month",
    "Year",
    "Starting Balance",
    "Current Balance",
    "Current Credit",
    "Balance After Credit",
    "Total Spent",
    "ID",
];

/// `-1234.56`: no symbol or grouping, so spreadsheets read it as a number
fn plain_amount(amount: Money) -> String {
    format!(
        "{}{}.{:02}",
        if amount.is_negative() { "-" } else { "" },
        amount.major().unsigned_abs(),
        amount.minor_part()
    )
}

/// Write entries as CSV in the order given
pub fn export_entries_csv<W: Write>(entries: &[Entry], writer: W) -> SpendlogResult<()> {
    let export_err = |e: ::csv::Error| SpendlogError::Export(e.to_string());
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_err)?;
    for entry in entries {
        csv_writer
            .write_record([
                entry.account_name.clone(),
                entry.month.to_string(),
                entry.year.to_string(),
                plain_amount(entry.starting_balance),
                plain_amount(entry.current_balance),
                plain_amount(entry.current_credit),
                plain_amount(entry.balance_after_credit),
                plain_amount(entry.total_spent),
                entry.id.to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{entry, named_entry};
    use crate::models::{AccountId, Month};

    #[test]
    fn test_plain_amount() {
        assert_eq!(plain_amount(Money::from_minor(123_456_78)), "123456.78");
        assert_eq!(plain_amount(Money::from_minor(-5)), "-0.05");
        assert_eq!(plain_amount(Money::zero()), "0.00");
    }

    #[test]
    fn test_export_rows_in_order() {
        let a = AccountId::new();
        let rows = vec![
            entry(a, Month::February, 2024, 150, 10, 30),
            entry(a, Month::January, 2024, 100, 20, 50),
        ];

        let mut buf = Vec::new();
        export_entries_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Account,Month,Year,Starting Balance"));
        assert!(lines[1].starts_with("TEST,February,2024,170.00,150.00,10.00,140.00,30.00,ent-"));
        assert!(lines[2].starts_with("TEST,January,2024,"));
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let rows = vec![named_entry("ICICI, CORP", Month::May, 2024)];
        let mut buf = Vec::new();
        export_entries_csv(&rows, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("\"ICICI, CORP\",May,2024"));
    }

    #[test]
    fn test_empty_selection_writes_header_only() {
        let mut buf = Vec::new();
        export_entries_csv(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
