//! Category display formatting
//!
//! Prints the static category table as a tree.

use crate::models::CATEGORIES;

/// Format the category → subcategory table as a tree
pub fn format_category_tree() -> String {
    let mut output = String::new();

    for (i, (category, subcategories)) in CATEGORIES.iter().enumerate() {
        output.push_str(&format!("{}\n", category));

        for (j, sub) in subcategories.iter().enumerate() {
            let is_last = j == subcategories.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };
            output.push_str(&format!("  {}{}\n", prefix, sub));
        }

        if i < CATEGORIES.len() - 1 {
            output.push('\n');
        }
    }

    output
}
