//! Aggregations over a ledger snapshot
//!
//! Pure functions: they take the records a caller already read from the
//! ledger and never touch storage themselves.

use std::collections::BTreeMap;

use crate::models::Expense;

/// Sum of all amounts; zero for an empty ledger
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Total amount per category, sorted by category label
///
/// Categories without expenses are absent rather than zero.
pub fn sum_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    sum_by(expenses, |e| e.category.as_str())
}

/// Total amount per subcategory label, sorted by label
///
/// Keyed by the subcategory alone: two categories sharing a subcategory
/// label are merged into one group.
pub fn sum_by_subcategory(expenses: &[Expense]) -> BTreeMap<String, f64> {
    sum_by(expenses, |e| e.subcategory.as_str())
}

/// Total amount per month key, ordered by key
///
/// See [`month_key`] for how the key is derived from a date string.
pub fn monthly_report(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *months.entry(month_key(&expense.date)).or_insert(0.0) += expense.amount;
    }
    months.into_iter().collect()
}

/// Month grouping key for a stored date string
///
/// `DD/MM/YYYY` becomes `MM/YYYY` (everything after the first `/`). A date
/// with no `/` falls back to its first seven characters.
pub fn month_key(date: &str) -> String {
    match date.split_once('/') {
        Some((_, rest)) => rest.to_string(),
        None => date.chars().take(7).collect(),
    }
}

fn sum_by<'a, F>(expenses: &'a [Expense], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&'a Expense) -> &'a str,
{
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *groups.entry(key(expense).to_string()).or_insert(0.0) += expense.amount;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str, category: &str, subcategory: &str, amount: f64) -> Expense {
        Expense {
            date: date.to_string(),
            description: "test".to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            amount,
        }
    }

    #[test]
    fn test_total_spent_empty_is_zero() {
        assert_eq!(total_spent(&[]), 0.0);
    }

    #[test]
    fn test_total_spent() {
        let expenses = vec![
            expense("01/01/2024", "Food", "Snacks", 10.25),
            expense("02/01/2024", "Bills", "Internet", 49.99),
            expense("03/01/2024", "Others", "Gifts", 0.76),
        ];
        assert!((total_spent(&expenses) - 61.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_by_category() {
        let expenses = vec![
            expense("01/01/2024", "Food", "Snacks", 10.0),
            expense("01/01/2024", "Food", "Cafes", 5.0),
            expense("01/01/2024", "Transport", "Fuel", 20.0),
        ];

        let sums = sum_by_category(&expenses);
        assert_eq!(sums.len(), 2);
        assert_eq!(sums["Food"], 15.0);
        assert_eq!(sums["Transport"], 20.0);
        assert!(!sums.contains_key("Bills"));
    }

    #[test]
    fn test_sum_by_category_is_sorted_by_label() {
        let expenses = vec![
            expense("01/01/2024", "Transport", "Fuel", 1.0),
            expense("01/01/2024", "Bills", "Internet", 1.0),
            expense("01/01/2024", "Food", "Snacks", 1.0),
        ];
        let keys: Vec<_> = sum_by_category(&expenses).into_keys().collect();
        assert_eq!(keys, vec!["Bills", "Food", "Transport"]);
    }

    #[test]
    fn test_sum_by_subcategory_merges_shared_labels() {
        let expenses = vec![
            expense("01/01/2024", "Bills", "Household", 30.0),
            expense("01/01/2024", "Shopping", "Household", 12.0),
            expense("01/01/2024", "Food", "Cafes", 4.0),
        ];

        let sums = sum_by_subcategory(&expenses);
        assert_eq!(sums.len(), 2);
        assert_eq!(sums["Household"], 42.0);
        assert_eq!(sums["Cafes"], 4.0);
    }

    #[test]
    fn test_monthly_report() {
        let expenses = vec![
            expense("01/03/2024", "Food", "Snacks", 10.0),
            expense("15/03/2024", "Food", "Snacks", 5.0),
            expense("02/04/2024", "Food", "Snacks", 7.0),
        ];

        assert_eq!(
            monthly_report(&expenses),
            vec![("03/2024".to_string(), 15.0), ("04/2024".to_string(), 7.0)]
        );
    }

    #[test]
    fn test_monthly_report_empty() {
        assert!(monthly_report(&[]).is_empty());
    }

    #[test]
    fn test_month_key_fallback() {
        assert_eq!(month_key("25/12/2023"), "12/2023");
        assert_eq!(month_key("2024-03-15"), "2024-03");
        assert_eq!(month_key("short"), "short");
    }

    #[test]
    fn test_monthly_report_merges_fallback_collisions() {
        let expenses = vec![
            expense("2024-03-01", "Food", "Snacks", 1.0),
            expense("2024-03-28", "Food", "Snacks", 2.0),
        ];
        assert_eq!(monthly_report(&expenses), vec![("2024-03".to_string(), 3.0)]);
    }
}
