//! Backup restoration for the expense tracker
//!
//! Restores the ledger from a backup or any externally supplied CSV file.
//! The file must carry every ledger column; this is checked before anything
//! is written, so a rejected restore leaves the current ledger untouched.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, LEDGER_COLUMNS};
use crate::storage::file_io::{csv_reader, deserialize_rows, missing_columns, read_headers};
use crate::storage::LedgerRepository;

/// Handles restoring the ledger from CSV files
pub struct RestoreManager {
    ledger: LedgerRepository,
}

impl RestoreManager {
    /// Create a new RestoreManager writing into `ledger`
    pub fn new(ledger: LedgerRepository) -> Self {
        Self { ledger }
    }

    /// Replace the ledger with the contents of a CSV file
    ///
    /// This overwrites all current data. Extra columns in the file are
    /// ignored and not carried into the ledger.
    pub fn restore_from_file(&self, path: &Path) -> ExpenseResult<RestoreResult> {
        let file = open(path)?;
        self.restore_from_reader(BufReader::new(file))
    }

    /// Replace the ledger with CSV data read from `source`
    pub fn restore_from_reader<R: Read>(&self, source: R) -> ExpenseResult<RestoreResult> {
        let mut reader = csv_reader(source);
        let headers = read_headers(&mut reader)?;

        let missing = missing_columns(&headers, &LEDGER_COLUMNS);
        if !missing.is_empty() {
            warn!(missing = ?missing, "rejected restore payload");
            return Err(ExpenseError::InvalidRestore { missing });
        }

        let expenses: Vec<Expense> = deserialize_rows(&mut reader)?;
        let previous_count = self.ledger.read_all_or_empty().len();

        self.ledger.replace(&expenses)?;
        info!(
            restored = expenses.len(),
            replaced = previous_count,
            "restored ledger"
        );

        Ok(RestoreResult {
            restored_count: expenses.len(),
            replaced_count: previous_count,
        })
    }

    /// Check a CSV file without restoring it
    pub fn validate_file(&self, path: &Path) -> ExpenseResult<ValidationResult> {
        let file = open(path)?;
        let mut reader = csv_reader(BufReader::new(file));
        let headers = read_headers(&mut reader)?;

        let missing_columns = missing_columns(&headers, &LEDGER_COLUMNS);
        let extra_columns = headers
            .iter()
            .filter(|h| !LEDGER_COLUMNS.iter().any(|c| c == h))
            .map(|h| h.to_string())
            .collect();

        let mut row_count = 0;
        for record in reader.records() {
            record.map_err(|e| ExpenseError::Csv(format!("Malformed row: {}", e)))?;
            row_count += 1;
        }

        Ok(ValidationResult {
            missing_columns,
            extra_columns,
            row_count,
        })
    }
}

fn open(path: &Path) -> ExpenseResult<File> {
    File::open(path).map_err(|e| {
        ExpenseError::Io(format!("Failed to read restore file {}: {}", path.display(), e))
    })
}

/// Result of a restore operation
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RestoreResult {
    /// Number of expenses now in the ledger
    pub restored_count: usize,
    /// Number of expenses the ledger held before the restore
    pub replaced_count: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored {} expense(s), replacing {} previous expense(s)",
            self.restored_count, self.replaced_count
        )
    }
}

/// Result of validating a restore file
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Required ledger columns the file lacks
    pub missing_columns: Vec<String>,
    /// Columns present in the file that the ledger does not use
    pub extra_columns: Vec<String>,
    /// Number of data rows
    pub row_count: usize,
}

impl ValidationResult {
    /// Whether the file can be restored
    pub fn is_valid(&self) -> bool {
        self.missing_columns.is_empty()
    }

    /// Get a summary of the file
    pub fn summary(&self) -> String {
        if !self.is_valid() {
            return format!(
                "Invalid file: missing {}",
                self.missing_columns.join(", ")
            );
        }

        if self.extra_columns.is_empty() {
            format!("Valid file with {} expense(s)", self.row_count)
        } else {
            format!(
                "Valid file with {} expense(s); extra column(s) ignored: {}",
                self.row_count,
                self.extra_columns.join(", ")
            )
        }
    }
}
