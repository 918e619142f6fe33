//! Ledger repository for CSV storage
//!
//! The ledger is one flat CSV file holding every expense in insertion order.
//! Each operation reads and/or rewrites the whole file; nothing is cached
//! between calls.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, LEDGER_COLUMNS};

use super::file_io::{csv_reader, deserialize_rows, missing_columns, read_headers, write_csv_atomic};

/// Repository for the expense ledger file
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a repository backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with only the header row if it doesn't exist
    ///
    /// Returns `true` when the file was created. Calling this on an existing
    /// file leaves it untouched.
    pub fn initialize(&self) -> ExpenseResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        write_csv_atomic::<Expense, _>(&self.path, &LEDGER_COLUMNS, &[])?;
        info!(path = %self.path.display(), "created empty ledger");
        Ok(true)
    }

    /// Record a new expense dated today
    ///
    /// Reads the whole ledger, appends one row and rewrites the file. On
    /// failure the previous file is left in place.
    pub fn append(
        &self,
        description: &str,
        category: &str,
        subcategory: &str,
        amount: f64,
    ) -> ExpenseResult<Expense> {
        self.push(Expense::today(description, category, subcategory, amount))
    }

    /// Record a new expense with an explicit date
    pub fn append_dated(
        &self,
        date: NaiveDate,
        description: &str,
        category: &str,
        subcategory: &str,
        amount: f64,
    ) -> ExpenseResult<Expense> {
        self.push(Expense::new(date, description, category, subcategory, amount))
    }

    fn push(&self, expense: Expense) -> ExpenseResult<Expense> {
        let mut expenses = self.read_all().map_err(|e| {
            ExpenseError::Storage(format!("Failed to add expense: {}", e))
        })?;

        expenses.push(expense.clone());
        self.replace(&expenses)?;

        debug!(
            total_rows = expenses.len(),
            category = %expense.category,
            amount = expense.amount,
            "appended expense"
        );
        Ok(expense)
    }

    /// Read every expense in file order
    ///
    /// A missing file is an empty ledger. A file that cannot be parsed, or
    /// that lacks one of the ledger columns, is an error.
    pub fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = csv_reader(BufReader::new(file));
        let headers = read_headers(&mut reader)?;

        let missing = missing_columns(&headers, &LEDGER_COLUMNS);
        if !missing.is_empty() {
            return Err(ExpenseError::Storage(format!(
                "Failed to parse {}: missing column(s) {}",
                self.path.display(),
                missing.join(", ")
            )));
        }

        let expenses: Vec<Expense> = deserialize_rows(&mut reader).map_err(|e| {
            ExpenseError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!(rows = expenses.len(), "read ledger");
        Ok(expenses)
    }

    /// Read every expense, degrading to an empty ledger on failure
    ///
    /// The failure is logged; callers that need to show it to the user
    /// should use [`LedgerRepository::read_all`] instead.
    pub fn read_all_or_empty(&self) -> Vec<Expense> {
        match self.read_all() {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!(error = %e, "ledger unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the whole ledger with `expenses`
    ///
    /// No merge and no validation: restore callers check columns before
    /// they get here.
    pub fn replace(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_csv_atomic(&self.path, &LEDGER_COLUMNS, expenses)?;
        debug!(rows = expenses.len(), path = %self.path.display(), "wrote ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::{format_date, today};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = LedgerRepository::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, ledger)
    }

    const HEADER: &str = "Date,Description,Category,Subcategory,Amount\n";

    #[test]
    fn test_initialize_creates_header_only_file() {
        let (_temp, ledger) = create_test_ledger();

        assert!(ledger.initialize().unwrap());
        assert_eq!(fs::read_to_string(ledger.path()).unwrap(), HEADER);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_temp, ledger) = create_test_ledger();

        ledger.initialize().unwrap();
        let once = fs::read_to_string(ledger.path()).unwrap();
        assert!(!ledger.initialize().unwrap());
        let twice = fs::read_to_string(ledger.path()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let (_temp, ledger) = create_test_ledger();
        ledger.initialize().unwrap();
        ledger.append("Coffee", "Food", "Cafes", 3.5).unwrap();

        ledger.initialize().unwrap();
        assert_eq!(ledger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let (_temp, ledger) = create_test_ledger();
        assert!(ledger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_appends_read_back_in_order() {
        let (_temp, ledger) = create_test_ledger();
        ledger.initialize().unwrap();

        ledger.append("Lunch", "Food", "Restaurants", 12.5).unwrap();
        ledger.append("Taxi", "Transport", "Cabs", 20.0).unwrap();
        ledger.append("Netflix", "Entertainment", "Subscriptions", 9.99).unwrap();

        let expenses = ledger.read_all().unwrap();
        let descriptions: Vec<_> = expenses.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Lunch", "Taxi", "Netflix"]);

        assert_eq!(expenses[1].category, "Transport");
        assert_eq!(expenses[1].subcategory, "Cabs");
        assert!((expenses[2].amount - 9.99).abs() < f64::EPSILON);

        let expected_date = format_date(today());
        assert!(expenses.iter().all(|e| e.date == expected_date));
    }

    #[test]
    fn test_append_without_initialize_creates_file() {
        let (_temp, ledger) = create_test_ledger();

        ledger.append("Gift", "Others", "Gifts", 25.0).unwrap();
        assert_eq!(ledger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_append_dated() {
        let (_temp, ledger) = create_test_ledger();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let stored = ledger
            .append_dated(date, "Fuel", "Transport", "Fuel", 40.0)
            .unwrap();
        assert_eq!(stored.date, "05/03/2024");
        assert_eq!(ledger.read_all().unwrap(), vec![stored]);
    }

    #[test]
    fn test_description_with_comma_and_quotes() {
        let (_temp, ledger) = create_test_ledger();

        ledger
            .append("Dinner, \"fancy\"", "Food", "Restaurants", 80.0)
            .unwrap();
        assert_eq!(ledger.read_all().unwrap()[0].description, "Dinner, \"fancy\"");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let (_temp, ledger) = create_test_ledger();
        fs::write(
            ledger.path(),
            format!("{}01/03/2024,Lunch,Food,Restaurants,abc\n", HEADER),
        )
        .unwrap();

        assert!(matches!(ledger.read_all(), Err(ExpenseError::Storage(_))));
        assert!(ledger.read_all_or_empty().is_empty());
    }

    #[test]
    fn test_file_missing_column_is_error() {
        let (_temp, ledger) = create_test_ledger();
        fs::write(ledger.path(), "Date,Description,Category,Amount\n").unwrap();

        let err = ledger.read_all().unwrap_err();
        assert!(err.to_string().contains("Subcategory"));
    }

    #[test]
    fn test_append_to_malformed_file_fails_and_keeps_file() {
        let (_temp, ledger) = create_test_ledger();
        let garbage = format!("{}x,y,z\n", HEADER);
        fs::write(ledger.path(), &garbage).unwrap();

        assert!(ledger.append("Lunch", "Food", "Restaurants", 10.0).is_err());
        assert_eq!(fs::read_to_string(ledger.path()).unwrap(), garbage);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let (temp, ledger) = create_test_ledger();
        ledger.append("Coffee", "Food", "Cafes", 3.5).unwrap();
        let before = fs::read(ledger.path()).unwrap();

        // A directory in place of the temp file makes the write fail
        fs::create_dir(temp.path().join("expenses.csv.tmp")).unwrap();

        let err = ledger.append("Lunch", "Food", "Restaurants", 10.0).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(ledger.replace(&[]).is_err());

        assert_eq!(fs::read(ledger.path()).unwrap(), before);
        assert_eq!(ledger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_extra_columns_are_tolerated() {
        let (_temp, ledger) = create_test_ledger();
        fs::write(
            ledger.path(),
            "Date,Description,Category,Subcategory,Amount,Note\n\
             01/03/2024,Lunch,Food,Restaurants,10,extra\n",
        )
        .unwrap();

        let expenses = ledger.read_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, 10.0);
    }

    #[test]
    fn test_replace_overwrites_everything() {
        let (_temp, ledger) = create_test_ledger();
        ledger.append("Old", "Food", "Snacks", 1.0).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let restored = vec![
            Expense::new(date, "New A", "Bills", "Internet", 50.0),
            Expense::new(date, "New B", "Shopping", "Clothes", 35.5),
        ];
        ledger.replace(&restored).unwrap();

        assert_eq!(ledger.read_all().unwrap(), restored);
        let contents = fs::read_to_string(ledger.path()).unwrap();
        assert!(contents.starts_with(HEADER));
    }
}
