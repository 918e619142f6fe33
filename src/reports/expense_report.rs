//! Expense Report
//!
//! Bundles the total and the category, subcategory and monthly breakdowns
//! into one report for terminal display or CSV export.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display::report::{format_amount, separator};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::write_csv;

use super::aggregate::{month_key, monthly_report, sum_by_category, sum_by_subcategory, total_spent};

/// Total for one group of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    /// Group label (category, subcategory or month key)
    pub label: String,
    /// Sum of amounts in the group
    pub total: f64,
    /// Number of expenses in the group
    pub count: usize,
    /// Share of overall spending, 0-100
    pub percentage: f64,
}

/// Full expense report
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    pub total_spent: f64,
    pub expense_count: usize,
    pub by_category: Vec<GroupTotal>,
    pub by_subcategory: Vec<GroupTotal>,
    pub by_month: Vec<GroupTotal>,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    section: &'a str,
    label: &'a str,
    amount: String,
    count: usize,
    percentage: String,
}

const CSV_HEADER: [&str; 5] = ["Section", "Label", "Amount", "Count", "Percentage"];

impl ExpenseReport {
    /// Generate a report from a ledger snapshot
    pub fn generate(expenses: &[Expense]) -> Self {
        let total = total_spent(expenses);

        let category_counts = count_by(expenses, |e| e.category.clone());
        let subcategory_counts = count_by(expenses, |e| e.subcategory.clone());
        let month_counts = count_by(expenses, |e| month_key(&e.date));

        Self {
            total_spent: total,
            expense_count: expenses.len(),
            by_category: to_groups(sum_by_category(expenses), &category_counts, total),
            by_subcategory: to_groups(sum_by_subcategory(expenses), &subcategory_counts, total),
            by_month: to_groups(monthly_report(expenses), &month_counts, total),
        }
    }

    /// Whether the report was generated from an empty ledger
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Report\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent: {}\n",
            format_amount(self.total_spent, currency)
        ));
        output.push_str(&format!("Expenses:    {}\n", self.expense_count));

        let sections = [
            ("By Category", &self.by_category),
            ("By Subcategory", &self.by_subcategory),
            ("By Month", &self.by_month),
        ];

        for (title, groups) in sections {
            output.push_str(&format!("\n{}\n", title.to_uppercase()));
            output.push_str(&format!(
                "{:<30} {:>14} {:>7} {:>8}\n",
                "Label", "Amount", "Count", "%"
            ));
            output.push_str(&separator(62));
            output.push('\n');

            if groups.is_empty() {
                output.push_str("  (no data)\n");
            }

            for group in groups.iter() {
                output.push_str(&format!(
                    "{:<30} {:>14} {:>7} {:>7.1}%\n",
                    group.label,
                    format_amount(group.total, currency),
                    group.count,
                    group.percentage
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        let mut rows = vec![ReportRow {
            section: "Total",
            label: "All",
            amount: format!("{:.2}", self.total_spent),
            count: self.expense_count,
            percentage: "100.00".to_string(),
        }];

        let sections = [
            ("Category", &self.by_category),
            ("Subcategory", &self.by_subcategory),
            ("Month", &self.by_month),
        ];

        for (section, groups) in sections {
            for group in groups.iter() {
                rows.push(ReportRow {
                    section,
                    label: &group.label,
                    amount: format!("{:.2}", group.total),
                    count: group.count,
                    percentage: format!("{:.2}", group.percentage),
                });
            }
        }

        write_csv(writer, &CSV_HEADER, &rows)
            .map_err(|e| ExpenseError::Export(e.to_string()))
    }
}

fn count_by<F>(expenses: &[Expense], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&Expense) -> String,
{
    let mut counts = BTreeMap::new();
    for expense in expenses {
        *counts.entry(key(expense)).or_insert(0) += 1;
    }
    counts
}

fn to_groups(
    sums: impl IntoIterator<Item = (String, f64)>,
    counts: &BTreeMap<String, usize>,
    total: f64,
) -> Vec<GroupTotal> {
    sums.into_iter()
        .map(|(label, sum)| GroupTotal {
            count: counts.get(&label).copied().unwrap_or(0),
            percentage: if total == 0.0 { 0.0 } else { sum * 100.0 / total },
            total: sum,
            label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let april = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        vec![
            Expense::new(march, "Lunch", "Food", "Restaurants", 30.0),
            Expense::new(march, "Coffee", "Food", "Cafes", 10.0),
            Expense::new(april, "Fuel", "Transport", "Fuel", 60.0),
        ]
    }

    #[test]
    fn test_generate() {
        let report = ExpenseReport::generate(&sample());

        assert_eq!(report.total_spent, 100.0);
        assert_eq!(report.expense_count, 3);
        assert_eq!(
            report.by_category,
            vec![
                GroupTotal { label: "Food".into(), total: 40.0, count: 2, percentage: 40.0 },
                GroupTotal { label: "Transport".into(), total: 60.0, count: 1, percentage: 60.0 },
            ]
        );
        assert_eq!(report.by_subcategory.len(), 3);
        assert_eq!(report.by_month[0].label, "03/2024");
        assert_eq!(report.by_month[0].count, 2);
    }

    #[test]
    fn test_empty_report() {
        let report = ExpenseReport::generate(&[]);
        assert!(report.is_empty());
        assert_eq!(report.total_spent, 0.0);
        assert!(report.by_category.is_empty());
        assert!(report.format_terminal("$").contains("(no data)"));
    }

    #[test]
    fn test_format_terminal() {
        let output = ExpenseReport::generate(&sample()).format_terminal("$");
        assert!(output.contains("Total Spent: $100.00"));
        assert!(output.contains("BY SUBCATEGORY"));
        assert!(output.contains("04/2024"));
    }

    #[test]
    fn test_export_csv() {
        let mut out = Vec::new();
        ExpenseReport::generate(&sample()).export_csv(&mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Section,Label,Amount,Count,Percentage"));
        assert_eq!(lines.next(), Some("Total,All,100.00,3,100.00"));
        assert!(csv.contains("Category,Food,40.00,2,40.00"));
        assert!(csv.contains("Month,04/2024,60.00,1,60.00"));
    }
}
