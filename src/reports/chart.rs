//! Chart data
//!
//! Produces the labelled values a bar chart is drawn from. Drawing itself is
//! left to the display layer. An empty ledger yields `None` so callers show a
//! "no data" message instead of an empty chart.

use crate::models::Expense;

use super::aggregate::{monthly_report, sum_by_category, sum_by_subcategory};

/// One bar of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Data for a single bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Chart title
    pub title: String,
    /// Name of the label axis
    pub axis: String,
    /// Bars in display order
    pub bars: Vec<Bar>,
}

impl ChartData {
    fn new(title: &str, axis: &str, bars: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            title: title.to_string(),
            axis: axis.to_string(),
            bars: bars
                .into_iter()
                .map(|(label, value)| Bar { label, value })
                .collect(),
        }
    }

    /// Largest bar value, or zero when there are no bars
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// Spending per category
pub fn category_chart(expenses: &[Expense]) -> Option<ChartData> {
    if expenses.is_empty() {
        return None;
    }
    Some(ChartData::new(
        "Expense Breakdown by Category",
        "Category",
        sum_by_category(expenses),
    ))
}

/// Spending per subcategory
pub fn subcategory_chart(expenses: &[Expense]) -> Option<ChartData> {
    if expenses.is_empty() {
        return None;
    }
    Some(ChartData::new(
        "Expense Breakdown by Subcategory",
        "Subcategory",
        sum_by_subcategory(expenses),
    ))
}

/// Spending per month
pub fn monthly_chart(expenses: &[Expense]) -> Option<ChartData> {
    if expenses.is_empty() {
        return None;
    }
    Some(ChartData::new(
        "Monthly Expense Breakdown",
        "Month",
        monthly_report(expenses),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        vec![
            Expense::new(date, "Lunch", "Food", "Restaurants", 12.0),
            Expense::new(date, "Bus", "Transport", "Public Transport", 3.0),
            Expense::new(date, "Snack", "Food", "Snacks", 2.0),
        ]
    }

    #[test]
    fn test_empty_ledger_has_no_chart() {
        assert!(category_chart(&[]).is_none());
        assert!(subcategory_chart(&[]).is_none());
        assert!(monthly_chart(&[]).is_none());
    }

    #[test]
    fn test_category_chart() {
        let chart = category_chart(&sample()).unwrap();
        assert_eq!(chart.axis, "Category");
        assert_eq!(
            chart.bars,
            vec![
                Bar { label: "Food".into(), value: 14.0 },
                Bar { label: "Transport".into(), value: 3.0 },
            ]
        );
        assert_eq!(chart.max_value(), 14.0);
    }

    #[test]
    fn test_subcategory_chart() {
        let chart = subcategory_chart(&sample()).unwrap();
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Public Transport", "Restaurants", "Snacks"]);
    }

    #[test]
    fn test_monthly_chart() {
        let chart = monthly_chart(&sample()).unwrap();
        assert_eq!(chart.bars, vec![Bar { label: "05/2024".into(), value: 17.0 }]);
    }
}
