//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod backup;
pub mod expense;
pub mod export;
pub mod report;

pub use backup::{handle_backup_command, BackupCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;
pub use report::{handle_chart_command, handle_report_command, ChartKind, ReportCommands};

use crate::models::Expense;
use crate::storage::Storage;

/// Load the ledger for display and reporting
///
/// An unreadable ledger is reported on stderr and treated as empty so that
/// read-only commands still produce output.
pub(crate) fn load_expenses(storage: &Storage) -> Vec<Expense> {
    match storage.ledger.read_all() {
        Ok(expenses) => expenses,
        Err(e) => {
            eprintln!("Error reading expense data: {}", e);
            Vec::new()
        }
    }
}
