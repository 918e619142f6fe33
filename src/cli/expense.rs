//! Expense CLI commands
//!
//! Entry and listing of expenses. Category/subcategory choices are checked
//! against the static table here, not in the store.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_category_tree, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::filter_by_categories;
use crate::models::resolve_selection;
use crate::reports::total_spent;
use crate::storage::Storage;

use super::load_expenses;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense dated today
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category (see `expense categories`)
        #[arg(short, long)]
        category: String,
        /// Subcategory belonging to the category
        #[arg(short, long)]
        subcategory: String,
    },

    /// List recorded expenses
    #[command(alias = "ls")]
    List {
        /// Only show these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Show the available categories and subcategories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            subcategory,
        } => {
            let description = description.trim();
            if description.is_empty() || !amount.is_finite() || amount <= 0.0 {
                return Err(ExpenseError::Validation(
                    "Please enter a description and a valid amount.".to_string(),
                ));
            }

            let (category, subcategory) = resolve_selection(&category, &subcategory)?;

            let expense = storage
                .ledger
                .append(description, category, subcategory, amount)
                .map_err(|e| {
                    ExpenseError::Storage(format!("Failed to add expense. Please try again. ({})", e))
                })?;

            println!("Expense added successfully!");
            println!(
                "  {}  {}  {} / {}  {}",
                expense.date,
                expense.description,
                expense.category,
                expense.subcategory,
                format_amount(expense.amount, &settings.currency_symbol)
            );
        }

        ExpenseCommands::List { category } => {
            let expenses = load_expenses(storage);

            if expenses.is_empty() {
                println!("No expenses found! Add some expenses to see them here.");
                return Ok(());
            }

            println!(
                "Total Spent: {}",
                format_amount(total_spent(&expenses), &settings.currency_symbol)
            );
            println!();

            let filtered = filter_by_categories(&expenses, &category);
            print!(
                "{}",
                format_expense_table(&filtered, &settings.currency_symbol)
            );

            if filtered.len() != expenses.len() {
                println!(
                    "Showing {} of {} expense(s).",
                    filtered.len(),
                    expenses.len()
                );
            }
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_tree());
        }
    }

    Ok(())
}
