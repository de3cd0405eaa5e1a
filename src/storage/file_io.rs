//! CSV file I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Read all CSV rows from a file, returning an empty list if the file doesn't exist
///
/// The first line must be a header row; rows are matched to fields by header name.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| {
            row.map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to parse {} at row {}: {}",
                    path.display(),
                    i + 1,
                    e
                ))
            })
        })
        .collect()
}

/// Write a header row followed by one CSV line per row
///
/// The header is written even when there are no rows.
pub fn write_csv<W, T>(writer: W, headers: &[&str], rows: &[T]) -> Result<W, ExpenseError>
where
    W: Write,
    T: Serialize,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(headers)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    csv_writer
        .into_inner()
        .map_err(|e| ExpenseError::Csv(format!("Failed to flush CSV writer: {}", e)))
}

/// Write CSV to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left as it was.
pub fn write_csv_atomic<T, P>(path: P, headers: &[&str], rows: &[T]) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let writer = write_csv(BufWriter::new(file), headers, rows).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to serialize data: {}", e))
    })?;

    let file = writer.into_inner().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to flush data: {}", e))
    })?;

    file.sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        value: i32,
    }

    const HEADERS: [&str; 2] = ["name", "value"];

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let rows: Vec<Row> = read_csv(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![
            Row { name: "a, b".into(), value: 1 },
            Row { name: "line\nbreak \"quoted\"".into(), value: 2 },
        ];

        write_csv_atomic(&path, &HEADERS, &rows).unwrap();
        let loaded: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(rows, loaded);
    }

    #[test]
    fn test_empty_write_has_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        write_csv_atomic::<Row, _>(&path, &HEADERS, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic(&path, &HEADERS, &[Row { name: "x".into(), value: 0 }]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_csv_atomic::<Row, _>(&path, &HEADERS, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_malformed_row_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, "name,value\nfoo,not-a-number\n").unwrap();

        let err = read_csv::<Row, _>(&path).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_write_to_memory() {
        let buf = write_csv(Vec::new(), &HEADERS, &[Row { name: "n".into(), value: 7 }]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "name,value\nn,7\n");
    }
}
