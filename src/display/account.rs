//! Account display formatting

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::Account;
use crate::services::AccountSummary;

/// Accounts with their entry counts as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Name", "Entries", "Latest", "ID"]);
    for summary in summaries {
        builder.push_record([
            summary.account.name.clone(),
            summary.entry_count.to_string(),
            summary.latest_period.clone().unwrap_or_else(|| "-".into()),
            summary.account.id.short(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

pub fn format_account_details(account: &Account) -> String {
    format!(
        "Account: {}\nID:      {}\nCreated: {}\nUpdated: {}\n",
        account.name,
        account.id,
        account.created_at.format("%Y-%m-%d %H:%M"),
        account.updated_at.format("%Y-%m-%d %H:%M"),
    )
}
