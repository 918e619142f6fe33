//! CSV Export functionality
//!
//! Writes ledger rows to an arbitrary CSV destination, with the same header
//! the ledger file uses so an export can be restored later.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, LEDGER_COLUMNS};
use crate::storage::write_csv;

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    write_csv(writer, &LEDGER_COLUMNS, expenses).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Keep only expenses in one of `categories`
///
/// An empty filter keeps everything. Matching is case-insensitive.
pub fn filter_by_categories(expenses: &[Expense], categories: &[String]) -> Vec<Expense> {
    if categories.is_empty() {
        return expenses.to_vec();
    }

    expenses
        .iter()
        .filter(|e| categories.iter().any(|c| c.eq_ignore_ascii_case(&e.category)))
        .cloned()
        .collect()
}
