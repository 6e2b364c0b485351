//! YAML export of the dashboard selection

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};

use super::json::SummaryExport;

/// Write the export as YAML with a short comment header
pub fn export_summary_yaml<W: Write>(export: &SummaryExport, writer: &mut W) -> SpendlogResult<()> {
    let export_err = |e: std::io::Error| SpendlogError::Export(e.to_string());

    writeln!(writer, "# spendlog ledger export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(
        writer,
        "# Filters: {} | {} | {}",
        export.filters.account, export.filters.month, export.filters.year
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| SpendlogError::Export(e.to_string()))
}
