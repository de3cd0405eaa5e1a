//! Expense table persistence
//!
//! Loads and rewrites the CSV table behind the expense log. The table is always
//! written in full; there is no incremental append on disk.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::{ExpenseRecord, ExpenseTable};

use super::file_io::{read_csv, write_csv_atomic};

/// Durable store for the expense table
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the CSV file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the table, treating any failure as an empty table
    ///
    /// A missing file is the normal first-run case. Unreadable or malformed
    /// files are also reported as empty; use `try_load` to see the error.
    pub fn load(&self) -> ExpenseTable {
        self.try_load().unwrap_or_default()
    }

    /// Load the table, reporting read and parse failures
    ///
    /// A missing file still yields an empty table.
    pub fn try_load(&self) -> Result<ExpenseTable, ExpenseError> {
        let records: Vec<ExpenseRecord> = read_csv(&self.path)?;
        Ok(ExpenseTable::from(records))
    }

    /// Overwrite the backing file with the full table
    pub fn persist(&self, table: &ExpenseTable) -> Result<(), ExpenseError> {
        write_csv_atomic(&self.path, &ExpenseTable::COLUMNS, table.records())
    }
}
