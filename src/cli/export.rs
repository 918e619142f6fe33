//! Export CLI command
//!
//! Writes the ledger (optionally filtered by category) to a CSV file or
//! stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, filter_by_categories};
use crate::storage::Storage;

use super::load_expenses;

/// Handle the export command; `-` as the path writes to stdout
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    categories: &[String],
) -> ExpenseResult<()> {
    let expenses = filter_by_categories(&load_expenses(storage), categories);

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        export_expenses_csv(&expenses, &mut handle)?;
        handle
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        return Ok(());
    }

    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_expenses_csv(&expenses, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!(
        "Exported {} expense(s) to: {}",
        expenses.len(),
        output.display()
    );
    Ok(())
}
