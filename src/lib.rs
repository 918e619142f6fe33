//! Expense Tracker - a personal expense ledger for the terminal
//!
//! Expenses are appended to a single CSV file and every report is
//! recomputed from that file on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense record and the fixed category table
//! - `storage`: CSV ledger store with atomic writes
//! - `reports`: Aggregations, summary report and chart data
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `backup`: Timestamped backups and restore
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.initialize()?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::ExpenseError;
