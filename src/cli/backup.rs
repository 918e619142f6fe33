//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Back up the current ledger
    Create,

    /// List all available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Replace the ledger with the contents of a backup or CSV file
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Delete old backups according to retention policy
    Prune {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BackupCommands,
) -> ExpenseResult<()> {
    let paths = storage.paths();
    let manager = BackupManager::new(paths, settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let (backup_path, deleted) = manager.create_backup_with_retention()?;
            println!("Backup created successfully!");
            println!("Location: {}", backup_path.display());
            if !deleted.is_empty() {
                println!("Pruned {} old backup(s).", deleted.len());
            }
        }

        BackupCommands::List { detailed } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: expense backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);

                if detailed {
                    println!(
                        "{}. {}\n   Created: {}\n   Size: {}\n   Age: {}\n",
                        i + 1,
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        format_size(backup.size_bytes),
                        format_duration(age),
                    );
                } else {
                    println!(
                        "  {}. {} ({} ago, {})",
                        i + 1,
                        backup.filename,
                        format_duration(age),
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, paths, &backup)?;

            let restore_manager = RestoreManager::new(storage.ledger.clone());
            let validation = restore_manager.validate_file(&backup_path)?;

            println!("File: {}", backup_path.display());
            println!("Status: {}", validation.summary());
            println!();

            if !validation.is_valid() {
                return Err(ExpenseError::InvalidRestore {
                    missing: validation.missing_columns,
                });
            }

            if !force {
                println!("WARNING: This will overwrite ALL current expenses!");
                println!("To proceed, run again with --force flag:");
                println!("  expense backup restore {} --force", backup);
                return Ok(());
            }

            // Snapshot first; an empty ledger has nothing worth keeping
            match storage.ledger.read_all() {
                Ok(expenses) if expenses.is_empty() => {}
                Ok(_) => {
                    let pre_restore = manager.create_backup()?;
                    println!("Pre-restore backup saved: {}", pre_restore.display());
                }
                Err(e) => {
                    eprintln!("Warning: current ledger could not be read ({})", e);
                    let raw_copy = manager.copy_ledger_file()?;
                    println!("Unreadable ledger copied to: {}", raw_copy.display());
                }
            }

            let result = restore_manager.restore_from_file(&backup_path)?;
            println!("Data restored successfully!");
            println!("{}", result.summary());
        }

        BackupCommands::Prune { force } => {
            let backups = manager.list_backups()?;
            let max_backups = manager.keep_count();
            let to_delete = backups.len().saturating_sub(max_backups);

            if to_delete == 0 {
                println!("No backups to prune.");
                println!(
                    "Retention policy keeps {} backup(s); you have {}.",
                    max_backups,
                    backups.len()
                );
                return Ok(());
            }

            println!(
                "Retention policy keeps {} backup(s); {} of {} would be deleted.",
                max_backups,
                to_delete,
                backups.len()
            );

            if !force {
                println!("To delete old backups, run again with --force flag:");
                println!("  expense backup prune --force");
                return Ok(());
            }

            let deleted = manager.enforce_retention()?;
            println!("Deleted {} backup(s).", deleted.len());
        }
    }

    Ok(())
}

/// Resolve a backup identifier to a full path
fn resolve_backup_path(
    manager: &BackupManager,
    paths: &ExpensePaths,
    backup: &str,
) -> ExpenseResult<PathBuf> {
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| ExpenseError::backup_not_found("latest"));
    }

    let path = PathBuf::from(backup);
    if path.exists() {
        return Ok(path);
    }

    let in_backup_dir = paths.backup_dir().join(backup);
    if in_backup_dir.exists() {
        return Ok(in_backup_dir);
    }

    let with_ext = paths.backup_dir().join(format!("{}.csv", backup));
    if with_ext.exists() {
        return Ok(with_ext);
    }

    Err(ExpenseError::backup_not_found(backup))
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    format!("{}d", hours / 24)
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
