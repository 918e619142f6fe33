//! CSV file I/O utilities with atomic writes
//!
//! Provides the tabular read/write primitives the ledger and the restore
//! path share. Writes go to a temp file first and are renamed into place.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Build a CSV reader over `source` that trims whitespace around header
/// names; field values are kept as written
pub fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::Headers).from_reader(source)
}

/// Return the header row of a CSV source
pub fn read_headers<R: Read>(reader: &mut csv::Reader<R>) -> Result<StringRecord, ExpenseError> {
    reader
        .headers()
        .cloned()
        .map_err(|e| ExpenseError::Csv(format!("Failed to read header row: {}", e)))
}

/// Names from `required` that do not appear in `headers`, in `required` order
pub fn missing_columns(headers: &StringRecord, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect()
}

/// Deserialize every remaining row of a CSV reader
///
/// Columns are matched by header name, so extra columns are ignored.
pub fn deserialize_rows<T, R>(reader: &mut csv::Reader<R>) -> Result<Vec<T>, ExpenseError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(|e| ExpenseError::Csv(format!("Malformed row: {}", e)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write `header` followed by `rows` to `writer`
pub fn write_csv<T, W>(writer: W, header: &[&str], rows: &[T]) -> Result<(), ExpenseError>
where
    T: Serialize,
    W: Write,
{
    // Header is written by hand so an empty table still gets one
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer
        .write_record(header)
        .map_err(|e| ExpenseError::Csv(format!("Failed to write header: {}", e)))?;

    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| ExpenseError::Csv(format!("Failed to write row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush CSV data: {}", e)))?;

    Ok(())
}

/// Write a CSV table to a file atomically (write to temp, then rename)
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], rows: &[T]) -> Result<(), ExpenseError>
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

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    if let Err(e) = write_csv(&mut writer, header, rows) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
