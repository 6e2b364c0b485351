//! JSON export of the dashboard selection

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::{compute_metrics, selection, DashboardState, Metrics};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Entry;

/// Version of the export document layout
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// The filters and sort the selection was made with, as displayed
#[derive(Debug, Clone, Serialize)]
pub struct ExportFilters {
    pub account: String,
    pub month: String,
    pub year: String,
    pub sort_column: Option<String>,
    pub sort_direction: String,
}

/// Document written by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub filters: ExportFilters,
    pub metrics: Metrics,
    pub entry_count: usize,
    pub entries: Vec<Entry>,
}

impl SummaryExport {
    /// Build the export for a scope under the given dashboard state
    pub fn new(scope: &[Entry], state: &DashboardState, account_name: Option<&str>) -> Self {
        let entries = selection(scope, state);
        let metrics = compute_metrics(scope, &entries);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filters: ExportFilters {
                account: account_name.unwrap_or("All Accounts").to_string(),
                month: state.filter.month.to_string(),
                year: state.filter.year.to_string(),
                sort_column: state.sort.column.map(|c| c.key().to_string()),
                sort_direction: state.sort.direction.to_string(),
            },
            metrics,
            entry_count: entries.len(),
            entries,
        }
    }
}

/// Write the export as pretty JSON
pub fn export_summary_json<W: Write>(export: &SummaryExport, writer: &mut W) -> SpendlogResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| SpendlogError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendlogError::Export(e.to_string()))
}
