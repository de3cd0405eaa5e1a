//! Where Expense Tracker keeps its files
//!
//! Everything lives under one base directory:
//!
//! ```text
//! <base>/config.json        settings
//! <base>/audit.log          audit trail (JSONL)
//! <base>/data/expenses.csv  expense table
//! ```
//!
//! The base is `$EXPENSE_TRACKER_DATA_DIR` when set, otherwise the platform
//! data directory from `directories` (e.g. `~/.local/share/expense-tracker`).

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

const SETTINGS_FILE: &str = "config.json";
const AUDIT_FILE: &str = "audit.log";
const DATA_DIR: &str = "data";
const EXPENSES_FILE: &str = "expenses.csv";

/// Resolved file locations
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from the environment or the platform
    pub fn new() -> Result<Self, ExpenseError> {
        if let Some(custom) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(Self::with_base_dir(PathBuf::from(custom)));
        }

        ProjectDirs::from("", "", "expense-tracker")
            .map(|dirs| Self::with_base_dir(dirs.data_dir().to_path_buf()))
            .ok_or_else(|| {
                ExpenseError::Config(format!(
                    "Could not determine a data directory; set {}",
                    DATA_DIR_ENV
                ))
            })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_FILE)
    }

    /// Default location of the expense table
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join(EXPENSES_FILE)
    }

    /// Create the base and data directories if needed
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            ExpenseError::Io(format!("Failed to create {}: {}", data_dir.display(), e))
        })
    }
}
