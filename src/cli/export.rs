//! CLI command for data export
//!
//! Writes the filtered expenses as CSV, JSON or YAML, to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json, export_yaml, ExpenseExport};
use crate::services::{ExpenseFilter, FilteredView, Ledger};

use super::expense::FilterArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (ledger layout)
    Csv,
    /// JSON format (expenses plus summary)
    Json,
    /// YAML format (expenses plus summary, human-readable)
    Yaml,
}

/// Arguments for `expense export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the export command
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> ExpenseResult<()> {
    let filter = args.filter.resolve(ledger)?;
    let view = match &filter {
        Some(filter) => ledger.filter(filter),
        None => FilteredView::default(),
    };

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                ExpenseError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&view, filter.as_ref(), args.format, args.pretty, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;

            println!("Exported {} expense(s) to: {}", view.len(), output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&view, filter.as_ref(), args.format, args.pretty, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    view: &FilteredView<'_>,
    filter: Option<&ExpenseFilter>,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(view, writer),
        ExportFormat::Json => export_json(&ExpenseExport::from_view(view, filter)?, writer, pretty),
        ExportFormat::Yaml => export_yaml(&ExpenseExport::from_view(view, filter)?, writer),
    }
}
