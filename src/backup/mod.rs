//! Backup system for the expense tracker
//!
//! Provides timestamped CSV backups of the ledger and restore from a backup
//! or any CSV file carrying the ledger columns.
//!
//! # Architecture
//!
//! - `BackupManager`: creates, lists and prunes backups
//! - `RestoreManager`: validates restore files and replaces the ledger
//!
//! # Backup Format
//!
//! A backup is a plain ledger file named
//! `expense_tracker_backup-YYYYMMDD-HHMMSS-mmm.csv`, so it can be opened in
//! a spreadsheet or restored on another machine.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::backup::{BackupManager, RestoreManager};
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::LedgerRepository;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let backup_manager = BackupManager::new(&paths, settings.backup_retention);
//! let backup_path = backup_manager.create_backup()?;
//!
//! let restore_manager = RestoreManager::new(LedgerRepository::new(paths.ledger_file()));
//! let result = restore_manager.restore_from_file(&backup_path)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
