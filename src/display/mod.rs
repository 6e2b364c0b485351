//! Display formatting for terminal output
//!
//! Everything here returns a `String`; the CLI decides where it goes.

pub mod account;
pub mod dashboard;
pub mod entry;

pub use account::{format_account_details, format_account_list};
pub use dashboard::{
    format_dashboard, format_filter_options, format_metric_cards, format_page_footer, format_trend,
};
pub use entry::{format_entry_details, format_entry_table};

use crate::models::money::RUPEE;
use crate::models::Money;

/// `₹1,23,456.78`, or `-₹1,23,456.78` for negatives
pub fn format_inr(amount: Money) -> String {
    amount.format_with_symbol(RUPEE)
}
