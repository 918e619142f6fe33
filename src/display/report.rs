//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report and chart views.

use crate::reports::ChartData;

/// Format an amount with a currency symbol, rounded to 2 decimal places
pub fn format_amount(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render chart data as horizontal text bars
pub fn format_chart(chart: &ChartData, currency: &str, width: usize) -> String {
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(chart.axis.len());
    let max_value = chart.max_value();

    let mut output = String::new();
    output.push_str(&format!("{}\n", chart.title));
    output.push_str(&double_separator(label_width + width + 16));
    output.push('\n');

    for bar in &chart.bars {
        output.push_str(&format!(
            "{:<label_width$}  {}  {:>12}\n",
            bar.label,
            format_bar(bar.value, max_value, width),
            format_amount(bar.value, currency),
            label_width = label_width
        ));
    }

    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Bar;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5, "$"), "$12.50");
        assert_eq!(format_amount(0.0, "€"), "€0.00");
        assert_eq!(format_amount(-3.456, "$"), "-$3.46");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_format_chart() {
        let chart = ChartData {
            title: "Expense Breakdown by Category".into(),
            axis: "Category".into(),
            bars: vec![
                Bar { label: "Food".into(), value: 20.0 },
                Bar { label: "Bills".into(), value: 10.0 },
            ],
        };

        let output = format_chart(&chart, "$", 10);
        assert!(output.starts_with("Expense Breakdown by Category\n"));
        assert!(output.contains("██████████"));
        assert!(output.contains("█████░░░░░"));
        assert!(output.contains("$20.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
