//! Export module for the expense tracker
//!
//! Provides CSV export of the (optionally filtered) ledger.

pub mod csv;

pub use csv::{export_expenses_csv, filter_by_categories};
