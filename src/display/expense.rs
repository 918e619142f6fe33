//! Expense display formatting
//!
//! Renders ledger rows as a terminal table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::report::{format_amount, truncate};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Subcategory")]
    subcategory: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in ledger order
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found! Add some expenses to see them here.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: e.date.clone(),
        description: truncate(&e.description, 40),
        category: e.category.clone(),
        subcategory: e.subcategory.clone(),
        amount: format_amount(e.amount, currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}
