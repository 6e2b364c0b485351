//! `spendlog export`: write the current dashboard selection to a file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{PreferenceStore, Settings};
use crate::engine::selection;
use crate::error::{SpendlogError, SpendlogResult};
use crate::export::{export_entries_csv, export_summary_json, export_summary_yaml, ExportFormat, SummaryExport};
use crate::storage::Storage;

use super::summary::{resolve_view, ViewArgs};

/// Flags for `spendlog export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Output format; guessed from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub view: ViewArgs,
}

impl ExportArgs {
    fn resolved_format(&self) -> ExportFormat {
        self.format
            .or_else(|| ExportFormat::from_path(&self.output))
            .unwrap_or_default()
    }
}

fn create_output(path: &Path) -> SpendlogResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SpendlogError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle `spendlog export`
///
/// Exports every page of the filtered, sorted selection. Filters given on the
/// command line apply to this export only and are not remembered.
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    prefs: &dyn PreferenceStore,
    args: ExportArgs,
) -> SpendlogResult<()> {
    let format = args.resolved_format();
    let resolved = resolve_view(storage, prefs, settings.default_page_size, &args.view)?;
    let account_name = resolved.account.as_ref().map(|a| a.name.as_str());

    let mut writer = create_output(&args.output)?;
    let count = match format {
        ExportFormat::Csv => {
            let entries = selection(&resolved.scope, &resolved.state);
            export_entries_csv(&entries, &mut writer)?;
            entries.len()
        }
        ExportFormat::Json => {
            let export = SummaryExport::new(&resolved.scope, &resolved.state, account_name);
            export_summary_json(&export, &mut writer)?;
            export.entry_count
        }
        ExportFormat::Yaml => {
            let export = SummaryExport::new(&resolved.scope, &resolved.state, account_name);
            export_summary_yaml(&export, &mut writer)?;
            export.entry_count
        }
    };
    writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    println!(
        "Exported {} entries as {} to: {}",
        count,
        format,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendlogPaths;
    use crate::config::MemoryPreferenceStore;
    use crate::models::{EntryDraft, EntryField, Month};
    use crate::services::{AccountService, EntryService};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        AccountService::new(&storage).create("HDFC").unwrap();
        let entries = EntryService::new(&storage);
        for month in Month::ALL {
            entries
                .add(&EntryDraft::new("HDFC", 2024).with(EntryField::Month(month)))
                .unwrap();
        }
        (temp_dir, storage)
    }

    fn args(output: PathBuf, format: Option<ExportFormat>) -> ExportArgs {
        ExportArgs {
            output,
            format,
            view: ViewArgs::default(),
        }
    }

    #[test]
    fn test_format_resolution() {
        assert_eq!(args("out.yml".into(), None).resolved_format(), ExportFormat::Yaml);
        assert_eq!(args("out".into(), None).resolved_format(), ExportFormat::Csv);
        assert_eq!(
            args("out.yml".into(), Some(ExportFormat::Json)).resolved_format(),
            ExportFormat::Json
        );
    }

    #[test]
    fn test_csv_export_includes_every_page() {
        let (temp_dir, storage) = setup();
        let prefs = MemoryPreferenceStore::new();
        let output = temp_dir.path().join("ledger.csv");

        handle_export_command(&storage, &Settings::default(), &prefs, args(output.clone(), None))
            .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        // header plus twelve rows, though a page only holds ten
        assert_eq!(contents.lines().count(), 13);
    }

    #[test]
    fn test_json_export_respects_month_filter() {
        let (temp_dir, storage) = setup();
        let prefs = MemoryPreferenceStore::new();
        let output = temp_dir.path().join("ledger.json");
        let mut export_args = args(output.clone(), None);
        export_args.view.month = Some("March".into());

        handle_export_command(&storage, &Settings::default(), &prefs, export_args).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value["entry_count"], 1);
        assert_eq!(value["filters"]["month"], "March");
        assert_eq!(value["filters"]["account"], "HDFC");
    }
}
