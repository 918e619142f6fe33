//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, categories, reports and
//! charts for terminal display.

pub mod category;
pub mod expense;
pub mod report;

pub use category::format_category_tree;
pub use expense::format_expense_table;
pub use report::{format_amount, format_bar, format_chart};
