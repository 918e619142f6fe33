//! Aggregation and reporting for the expense tracker
//!
//! Totals, group-by sums, chart data and a combined report, all derived from
//! a ledger snapshot the caller reads from storage.

pub mod aggregate;
pub mod chart;
pub mod expense_report;

pub use aggregate::{month_key, monthly_report, sum_by_category, sum_by_subcategory, total_spent};
pub use chart::{category_chart, monthly_chart, subcategory_chart, Bar, ChartData};
pub use expense_report::{ExpenseReport, GroupTotal};
