//! Append-only JSONL audit log

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Audit log file, one JSON entry per line
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file on first use
    pub fn append(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Every entry, oldest first; a missing log has none
    pub fn entries(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| {
                    ExpenseError::Json(format!("Bad audit entry at line {}: {}", i + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn entry_count(&self) -> ExpenseResult<usize> {
        Ok(self.entries()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEvent;
    use crate::models::Money;
    use tempfile::TempDir;

    fn export_entry(count: usize) -> AuditEntry {
        AuditEntry::now(AuditEvent::Exported {
            destination: format!("out-{}.csv", count),
            format: "csv".into(),
            filter: "All".into(),
            count,
            total: Money::zero(),
        })
    }

    fn logger_in(temp_dir: &TempDir) -> AuditLogger {
        AuditLogger::new(temp_dir.path().join("audit.log"))
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        for count in 0..10 {
            logger.append(&export_entry(count)).unwrap();
        }

        let recent = logger.recent(3).unwrap();
        let counts: Vec<usize> = recent
            .iter()
            .map(|e| match e.event {
                AuditEvent::Exported { count, .. } => count,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(counts, vec![7, 8, 9]);
        assert_eq!(logger.recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_blank_lines_skipped_and_bad_lines_reported() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        logger.append(&export_entry(1)).unwrap();

        let mut contents = fs::read_to_string(logger.path()).unwrap();
        contents.push_str("\n\n");
        fs::write(logger.path(), &contents).unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);

        contents.push_str("not json\n");
        fs::write(logger.path(), &contents).unwrap();
        let err = logger.entries().unwrap_err();
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_append_fails_when_path_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        fs::create_dir(logger.path()).unwrap();

        assert!(logger.append(&export_entry(0)).is_err());
    }
}
