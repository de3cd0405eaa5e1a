//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::{CategoryFilter, ExpenseTable};

/// Export to YAML format
pub fn export_expenses_yaml<W: Write>(
    table: &ExpenseTable,
    filter: CategoryFilter,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = ExpenseExport::new(table, filter);

    writeln!(writer, "# Expense Tracker Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Filter: {}", export.filter)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
