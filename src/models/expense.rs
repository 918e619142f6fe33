//! Expense record model
//!
//! An expense is one row of the ledger file. Records carry no identifier;
//! they are addressed by their position in the ledger only.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Column names of the ledger file, in on-disk order
pub const LEDGER_COLUMNS: [&str; 5] = ["Date", "Description", "Category", "Subcategory", "Amount"];

/// Display format of the `Date` column (day/month/year, zero padded)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A single expense entry
///
/// Field names map onto the ledger header through serde renames, so the same
/// type is used for reading, writing and restoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date the expense was recorded, as a `DD/MM/YYYY` string
    #[serde(rename = "Date")]
    pub date: String,

    /// Free-text label
    #[serde(rename = "Description")]
    pub description: String,

    /// Top-level category label
    #[serde(rename = "Category")]
    pub category: String,

    /// Subcategory label (scoped to the category by the lookup table)
    #[serde(rename = "Subcategory")]
    pub subcategory: String,

    /// Amount spent
    #[serde(rename = "Amount", deserialize_with = "deserialize_amount")]
    pub amount: f64,
}

impl Expense {
    /// Create an expense dated on the given day
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: format_date(date),
            description: description.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            amount,
        }
    }

    /// Create an expense dated today (local time)
    pub fn today(
        description: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::new(today(), description, category, subcategory, amount)
    }

    /// Parse the stored date, if it is in the expected format
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{} / {}] {:.2}",
            self.date, self.description, self.category, self.subcategory, self.amount
        )
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date the way the ledger stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// Text fields are read verbatim; only the amount tolerates padding.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid amount '{}'", raw)))
}
