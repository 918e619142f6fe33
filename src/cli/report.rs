//! CLI commands for reports and charts
//!
//! Every command re-reads the whole ledger before aggregating.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_amount, format_chart};
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{
    category_chart, monthly_chart, monthly_report, subcategory_chart, sum_by_category,
    sum_by_subcategory, total_spent, ExpenseReport,
};
use crate::storage::{write_csv, Storage};

use super::load_expenses;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the total amount spent
    Total,

    /// Spending per category
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per subcategory
    Subcategory {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Combined report: total, categories, subcategories and months
    Summary {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// What a chart is grouped by
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Category,
    Subcategory,
    Monthly,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let expenses = load_expenses(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Total => {
            println!("Total Spent: {}", format_amount(total_spent(&expenses), currency));
            Ok(())
        }
        ReportCommands::Category { output } => {
            let rows: Vec<_> = sum_by_category(&expenses).into_iter().collect();
            show_grouped("Category", &rows, output.as_deref(), currency)
        }
        ReportCommands::Subcategory { output } => {
            let rows: Vec<_> = sum_by_subcategory(&expenses).into_iter().collect();
            show_grouped("Subcategory", &rows, output.as_deref(), currency)
        }
        ReportCommands::Monthly { output } => {
            println!("Total Spent: {}", format_amount(total_spent(&expenses), currency));
            println!();
            show_grouped("Month", &monthly_report(&expenses), output.as_deref(), currency)
        }
        ReportCommands::Summary { output } => {
            let report = ExpenseReport::generate(&expenses);
            if let Some(path) = output {
                let mut writer = BufWriter::new(create_file(&path)?);
                report.export_csv(&mut writer)?;
                println!("Summary report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(currency));
            }
            Ok(())
        }
    }
}

/// Handle the chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    kind: ChartKind,
    width: usize,
) -> ExpenseResult<()> {
    let expenses = load_expenses(storage);

    let chart = match kind {
        ChartKind::Category => category_chart(&expenses),
        ChartKind::Subcategory => subcategory_chart(&expenses),
        ChartKind::Monthly => monthly_chart(&expenses),
    };

    match chart {
        Some(chart) => print!("{}", format_chart(&chart, &settings.currency_symbol, width)),
        None => println!("No data available for visualization."),
    }

    Ok(())
}

fn show_grouped(
    label: &str,
    rows: &[(String, f64)],
    output: Option<&Path>,
    currency: &str,
) -> ExpenseResult<()> {
    if rows.is_empty() {
        println!("No data available for the report.");
        return Ok(());
    }

    if let Some(path) = output {
        let writer = BufWriter::new(create_file(path)?);
        write_csv(writer, &[label, "Amount"], rows)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        println!("Report exported to: {}", path.display());
        return Ok(());
    }

    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(label.len());

    println!("{:<width$}  {:>14}", label, "Amount", width = width);
    println!("{}", "-".repeat(width + 16));
    for (name, amount) in rows {
        println!(
            "{:<width$}  {:>14}",
            name,
            format_amount(*amount, currency),
            width = width
        );
    }

    Ok(())
}

fn create_file(path: &Path) -> ExpenseResult<File> {
    File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}
