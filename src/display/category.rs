//! Expense category styling
//!
//! One lookup table maps each category to its glyph and terminal colour.
//! Unknown or missing categories get the default style.

use crate::models::ExpenseCategory;

/// How a category is drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    /// ANSI SGR colour code
    pub color: &'static str,
}

const RESET: &str = "\x1b[0m";

pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    icon: "$",
    color: "\x1b[36m",
};

const STYLES: [(ExpenseCategory, CategoryStyle); 6] = [
    (ExpenseCategory::Seeds, CategoryStyle { icon: "🌱", color: "\x1b[32m" }),
    (ExpenseCategory::Fertilizer, CategoryStyle { icon: "💧", color: "\x1b[34m" }),
    (ExpenseCategory::Equipment, CategoryStyle { icon: "🔧", color: "\x1b[35m" }),
    (ExpenseCategory::Labor, CategoryStyle { icon: "👥", color: "\x1b[33m" }),
    (ExpenseCategory::Fuel, CategoryStyle { icon: "⛽", color: "\x1b[31m" }),
    (ExpenseCategory::Maintenance, CategoryStyle { icon: "⚙", color: "\x1b[90m" }),
];

/// Style for a category, falling back to [`DEFAULT_STYLE`]
pub fn category_style(category: Option<ExpenseCategory>) -> CategoryStyle {
    category
        .and_then(|c| STYLES.iter().find(|(k, _)| *k == c).map(|(_, s)| *s))
        .unwrap_or(DEFAULT_STYLE)
}

/// Style for a raw category string, matched case-insensitively
pub fn category_style_for(name: &str) -> CategoryStyle {
    category_style(name.parse().ok())
}

/// Icon and label, e.g. "🌱 Seeds"
pub fn category_badge(category: ExpenseCategory) -> String {
    format!("{} {}", category_style(Some(category)).icon, category.label())
}

/// Wrap text in the category colour
pub fn colorize(category: Option<ExpenseCategory>, text: &str) -> String {
    format!("{}{}{}", category_style(category).color, text, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_style() {
        for category in ExpenseCategory::ALL {
            assert_ne!(category_style(Some(category)), DEFAULT_STYLE);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        assert_eq!(category_style(None), DEFAULT_STYLE);
        assert_eq!(category_style_for("irrigation"), DEFAULT_STYLE);
        assert_eq!(
            category_style_for("FUEL"),
            category_style(Some(ExpenseCategory::Fuel))
        );
    }

    #[test]
    fn test_badge_and_color() {
        assert_eq!(category_badge(ExpenseCategory::Seeds), "🌱 Seeds");
        let colored = colorize(Some(ExpenseCategory::Fuel), "x");
        assert!(colored.starts_with("\x1b[31m"));
        assert!(colored.ends_with(RESET));
    }
}
