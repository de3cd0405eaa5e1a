//! CLI commands for data export
//!
//! Writes the (optionally filtered) expense table to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::audit::AuditEvent;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::models::CategoryFilter;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV in the storage layout
    Csv,
    /// JSON document with totals
    Json,
    /// YAML document with totals
    Yaml,
}

impl ExportFormat {
    /// Lowercase name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Handle `expense export`
pub fn handle_export(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    filter: CategoryFilter,
    pretty: bool,
) -> ExpenseResult<()> {
    let table = storage.expenses.load().filter_by_category(filter);

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(&table, &mut writer)?,
        ExportFormat::Json => export_expenses_json(&table, filter, &mut writer, pretty)?,
        ExportFormat::Yaml => export_expenses_yaml(&table, filter, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush export: {}", e)))?;

    storage.log(AuditEvent::Exported {
        destination: output.display().to_string(),
        format: format.name().to_string(),
        filter: filter.to_string(),
        count: table.len(),
        total: table.grand_total(),
    })?;

    println!(
        "Exported {} expense(s), filter {} to: {}",
        table.len(),
        filter,
        output.display()
    );
    Ok(())
}
