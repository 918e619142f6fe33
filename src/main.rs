use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::{
    handle_backup_command, handle_chart_command, handle_expense_command, handle_export_command,
    handle_report_command, BackupCommands, ChartKind, ExpenseCommands, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::models::LEDGER_COLUMNS;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker backed by a CSV ledger",
    long_about = "Record day-to-day expenses under a fixed set of categories, \
                  then review totals, per-category and monthly breakdowns, and \
                  simple charts. Data lives in a single CSV file that can be \
                  backed up, restored and exported."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Draw a bar chart of spending
    Chart {
        /// What to group the bars by
        #[arg(value_enum)]
        kind: ChartKind,
        /// Width of the longest bar in characters
        #[arg(short, long, default_value_t = 40)]
        width: usize,
    },

    /// Export expenses to CSV ('-' for stdout)
    Export {
        /// Output file
        output: PathBuf,
        /// Only export these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Create the ledger and settings files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings.log_filter, cli.verbose);
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    // Every command works against an initialized ledger
    let storage = Storage::new(paths.clone())?;
    let created = storage.initialize()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Chart { kind, width }) => {
            handle_chart_command(&storage, &settings, kind, width)?;
        }
        Some(Commands::Export { output, category }) => {
            handle_export_command(&storage, &output, &category)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            if created {
                println!("Created ledger at: {}", paths.ledger_file().display());
            } else {
                println!("Ledger already exists at: {}", paths.ledger_file().display());
            }
            println!("Columns: {}", LEDGER_COLUMNS.join(", "));
            println!();
            println!("Run 'expense categories' to see the available categories.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Backups kept:    {}",
                settings.backup_retention.max_backups
            );
            println!("  Log filter:      {}", settings.log_filter);
        }
        None => {
            println!("Expense Tracker - record and review your spending");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add <DESCRIPTION> <AMOUNT> -c <CATEGORY> -s <SUBCATEGORY>' to record an expense.");
        }
    }

    Ok(())
}
