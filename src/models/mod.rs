//! Core data models for the expense tracker
//!
//! The expense record and the static category lookup table.

pub mod category;
pub mod expense;

pub use category::{category_names, resolve_selection, subcategories_for, CATEGORIES};
pub use expense::{Expense, DATE_FORMAT, LEDGER_COLUMNS};
