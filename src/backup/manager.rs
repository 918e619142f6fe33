//! Backup manager for the expense tracker
//!
//! Writes timestamped CSV copies of the ledger into the backup directory and
//! prunes old ones according to the retention setting.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use crate::config::paths::ExpensePaths;
use crate::config::settings::BackupRetention;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::LEDGER_COLUMNS;
use crate::storage::{write_csv_atomic, LedgerRepository};

const BACKUP_PREFIX: &str = "expense_tracker_backup-";
const BACKUP_EXTENSION: &str = "csv";

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    ledger: LedgerRepository,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &ExpensePaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            ledger: LedgerRepository::new(paths.ledger_file()),
            retention,
        }
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Back up the current ledger
    ///
    /// Returns the path to the created backup file. An empty ledger has
    /// nothing to back up and is rejected.
    pub fn create_backup(&self) -> ExpenseResult<PathBuf> {
        let expenses = self.ledger.read_all()?;
        if expenses.is_empty() {
            return Err(ExpenseError::Validation(
                "No expense data available to backup".to_string(),
            ));
        }

        let backup_path = self.next_backup_path()?;

        write_csv_atomic(&backup_path, &LEDGER_COLUMNS, &expenses)?;
        info!(path = %backup_path.display(), rows = expenses.len(), "created backup");

        Ok(backup_path)
    }

    /// Copy the ledger file byte for byte, without parsing it
    ///
    /// Used before overwriting a ledger that can no longer be read, so its
    /// contents survive for manual recovery.
    pub fn copy_ledger_file(&self) -> ExpenseResult<PathBuf> {
        let backup_path = self.next_backup_path()?;

        fs::copy(self.ledger.path(), &backup_path).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to copy {}: {}",
                self.ledger.path().display(),
                e
            ))
        })?;
        info!(path = %backup_path.display(), "copied unreadable ledger");

        Ok(backup_path)
    }

    fn next_backup_path(&self) -> ExpenseResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create backup directory: {}", e)))?;

        let now = Utc::now();
        let filename = format!(
            "{}{}-{:03}.{}",
            BACKUP_PREFIX,
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis(),
            BACKUP_EXTENSION
        );
        Ok(self.backup_dir.join(filename))
    }

    /// Create a backup and then enforce the retention policy
    pub fn create_backup_with_retention(&self) -> ExpenseResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> ExpenseResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| ExpenseError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == BACKUP_EXTENSION) {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Get the most recent backup
    pub fn latest_backup(&self) -> ExpenseResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Number of backups retention keeps; never less than one
    pub fn keep_count(&self) -> usize {
        (self.retention.max_backups as usize).max(1)
    }

    /// Delete backups beyond [`BackupManager::keep_count`], oldest first
    pub fn enforce_retention(&self) -> ExpenseResult<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        let keep = self.keep_count();
        let mut deleted = Vec::new();

        for backup in backups.into_iter().skip(keep) {
            fs::remove_file(&backup.path)
                .map_err(|e| ExpenseError::Io(format!("Failed to delete old backup: {}", e)))?;
            debug!(path = %backup.path.display(), "pruned backup");
            deleted.push(backup.path);
        }

        Ok(deleted)
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let created_at = parse_backup_timestamp(stamp)?;

    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS` or `YYYYMMDD-HHMMSS-mmm` into a UTC timestamp
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = stamp.split('-').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let (date_part, time_part) = (parts[0], parts[1]);
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if date_part.len() != 8
        || time_part.len() != 6
        || !all_digits(date_part)
        || !all_digits(time_part)
    {
        return None;
    }

    let millis: u32 = match parts.get(2) {
        Some(m) => m.parse().ok()?,
        None => 0,
    };

    let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;
    let datetime = date.and_hms_milli_opt(hour, minute, second, millis)?;

    Some(DateTime::from_naive_utc_and_offset(datetime, Utc))
}
