//! Storage layer for Expense Tracker
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation, plus access to the audit log.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_csv, write_csv, write_csv_atomic};

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditEvent, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that ties the expense table and audit log to the
/// configured paths
pub struct Storage {
    pub expenses: ExpenseStore,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance using the default table location
    pub fn new(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let file = paths.expenses_file();
        Self::with_expenses_file(paths, file)
    }

    /// Create a Storage instance whose table lives at an explicit file
    pub fn with_expenses_file(
        paths: &ExpensePaths,
        file: impl Into<PathBuf>,
    ) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::new(file),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
        })
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Turn audit logging on or off
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    /// Write an event to the audit log, unless auditing is off
    pub fn log(&self, event: AuditEvent) -> Result<(), ExpenseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.append(&AuditEntry::now(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn exported(count: usize) -> AuditEvent {
        AuditEvent::Exported {
            destination: "out.csv".into(),
            format: "csv".into(),
            filter: "All".into(),
            count,
            total: Money::zero(),
        }
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.expenses.path(),
            temp_dir.path().join("data").join("expenses.csv")
        );
        assert_eq!(storage.audit().path(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_storage_with_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let file = temp_dir.path().join("elsewhere.csv");
        let storage = Storage::with_expenses_file(&paths, &file).unwrap();

        assert_eq!(storage.expenses.path(), file);
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(&paths).unwrap();

        storage.log(exported(1)).unwrap();
        storage.set_audit_enabled(false);
        storage.log(exported(2)).unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
