//! Export of the current dashboard selection
//!
//! The selection is every entry passing the active filters, in the active
//! sort order, across all pages. Three formats:
//! - CSV for spreadsheets
//! - JSON with schema version, timestamp and the metric bundle
//! - YAML, the same document as JSON with a comment header

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

pub use self::csv::export_entries_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;

/// Output format for `spendlog export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet rows, one per entry
    #[default]
    Csv,
    /// Entries plus filters and metrics
    Json,
    /// Same document as JSON
    #[value(alias = "yml")]
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown export format '{}'. Use csv, json or yaml", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
