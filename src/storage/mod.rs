//! Storage layer for the expense tracker
//!
//! All access to the ledger file goes through [`LedgerRepository`], so the
//! flat CSV file can be swapped for another backend without touching callers.

pub mod file_io;
pub mod ledger;

pub use file_io::{csv_reader, deserialize_rows, missing_columns, write_csv, write_csv_atomic};
pub use ledger::LedgerRepository;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance, making sure directories exist
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Make sure the ledger file exists
    pub fn initialize(&self) -> Result<bool, ExpenseError> {
        self.ledger.initialize()
    }
}
