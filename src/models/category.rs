//! Static category lookup table
//!
//! Categories form a closed set, each with a fixed ordered list of
//! subcategories. The table feeds entry choices and is checked at the
//! command-line boundary only; the ledger store accepts any labels.

use crate::error::{ExpenseError, ExpenseResult};

/// Category label paired with its allowed subcategory labels
pub type CategoryEntry = (&'static str, &'static [&'static str]);

/// Ordered category → subcategories table
pub const CATEGORIES: &[CategoryEntry] = &[
    ("Food", &["Restaurants", "Snacks", "Cafes"]),
    ("Transport", &["Fuel", "Public Transport", "Cabs"]),
    ("Shopping", &["Accessories", "Clothes", "Electronics"]),
    ("Bills", &["Household", "Internet", "Product"]),
    ("Entertainment", &["Subscriptions", "Games", "Movies"]),
    ("Others", &["Gifts", "Donations", "Miscellaneous"]),
];

/// All category labels in table order
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(name, _)| *name)
}

/// Subcategories allowed under `category` (exact, case-sensitive match)
pub fn subcategories_for(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, subs)| *subs)
}

/// Whether `category` is part of the table
pub fn is_known_category(category: &str) -> bool {
    subcategories_for(category).is_some()
}

/// Resolve user input to canonical `(category, subcategory)` labels
///
/// Matching is case-insensitive so `food`/`cafes` resolves to `Food`/`Cafes`.
pub fn resolve_selection(
    category: &str,
    subcategory: &str,
) -> ExpenseResult<(&'static str, &'static str)> {
    let category = category.trim();
    let subcategory = subcategory.trim();

    let (cat_name, subs) = CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .ok_or_else(|| ExpenseError::category_not_found(category))?;

    let sub_name = subs
        .iter()
        .find(|name| name.eq_ignore_ascii_case(subcategory))
        .ok_or_else(|| {
            ExpenseError::Validation(format!(
                "'{}' is not a subcategory of {} (choose one of: {})",
                subcategory,
                cat_name,
                subs.join(", ")
            ))
        })?;

    Ok((cat_name, sub_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let names: Vec<_> = category_names().collect();
        assert_eq!(
            names,
            vec!["Food", "Transport", "Shopping", "Bills", "Entertainment", "Others"]
        );
    }

    #[test]
    fn test_subcategories_for() {
        assert_eq!(
            subcategories_for("Transport"),
            Some(&["Fuel", "Public Transport", "Cabs"][..])
        );
        assert_eq!(subcategories_for("transport"), None);
        assert!(is_known_category("Bills"));
        assert!(!is_known_category("Travel"));
    }

    #[test]
    fn test_resolve_selection_is_case_insensitive() {
        let (cat, sub) = resolve_selection("food", " CAFES ").unwrap();
        assert_eq!(cat, "Food");
        assert_eq!(sub, "Cafes");
    }

    #[test]
    fn test_resolve_selection_rejects_foreign_subcategory() {
        let err = resolve_selection("Food", "Fuel").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Restaurants, Snacks, Cafes"));
    }

    #[test]
    fn test_resolve_selection_unknown_category() {
        let err = resolve_selection("Travel", "Flights").unwrap_err();
        assert!(err.is_not_found());
    }
}
