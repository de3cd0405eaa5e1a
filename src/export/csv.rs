//! CSV Export functionality
//!
//! Writes the expense table in the same four-column layout used for storage,
//! so an export can be opened directly or used as a replacement table file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;
use crate::storage::write_csv;

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(table: &ExpenseTable, writer: &mut W) -> ExpenseResult<()> {
    write_csv(writer, &ExpenseTable::COLUMNS, table.records())
        .map(|_| ())
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
