//! Transaction and budget categories
//!
//! Categories are a fixed twelve-entry lookup table: a slug, a display name,
//! a hex color, and an icon name. They are not user-extensible; transactions
//! and budgets reference them by slug, and unknown slugs fall back to
//! "other" for display.

use std::fmt;

/// A classification label for transactions and budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier stored on transactions and budgets
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
    /// Hex color used for charts and progress bars
    pub color: &'static str,
    /// Icon name (display hint only)
    pub icon: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { slug: "housing", name: "Housing", color: "#7B61FF", icon: "Home" },
    Category { slug: "transportation", name: "Transportation", color: "#3D5AF1", icon: "Car" },
    Category { slug: "food", name: "Food & Dining", color: "#22C55E", icon: "UtensilsCrossed" },
    Category { slug: "utilities", name: "Utilities", color: "#F97316", icon: "Lightbulb" },
    Category { slug: "entertainment", name: "Entertainment", color: "#EC4899", icon: "Film" },
    Category { slug: "healthcare", name: "Healthcare", color: "#06B6D4", icon: "Heart" },
    Category { slug: "shopping", name: "Shopping", color: "#8B5CF6", icon: "ShoppingBag" },
    Category { slug: "personal", name: "Personal", color: "#F43F5E", icon: "User" },
    Category { slug: "education", name: "Education", color: "#10B981", icon: "GraduationCap" },
    Category { slug: "income", name: "Income", color: "#22C55E", icon: "ArrowDownLeft" },
    Category { slug: "savings", name: "Savings", color: "#6366F1", icon: "PiggyBank" },
    Category { slug: "other", name: "Other", color: "#78716C", icon: "CircleDashed" },
];

impl Category {
    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        CATEGORIES
    }

    /// Look up a category by slug
    pub fn find(slug: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.slug == slug)
    }

    /// Check whether a slug names a known category
    pub fn is_valid_slug(slug: &str) -> bool {
        Self::find(slug).is_some()
    }

    /// Look up a category by slug, falling back to "other"
    pub fn find_or_other(slug: &str) -> &'static Category {
        Self::find(slug).unwrap_or_else(|| {
            Self::find("other").expect("category table always contains 'other'")
        })
    }

    /// Display name for an optional slug ("Other" when absent or unknown)
    pub fn display_name(slug: Option<&str>) -> &'static str {
        match slug {
            Some(s) => Self::find_or_other(s).name,
            None => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_twelve_entries() {
        assert_eq!(Category::all().len(), 12);
    }

    #[test]
    fn test_find_known_slug() {
        let food = Category::find("food").unwrap();
        assert_eq!(food.name, "Food & Dining");
        assert_eq!(food.color, "#22C55E");
    }

    #[test]
    fn test_unknown_slug_falls_back_to_other() {
        assert_eq!(Category::find("crypto"), None);
        assert_eq!(Category::find_or_other("crypto").slug, "other");
        assert_eq!(Category::display_name(Some("crypto")), "Other");
        assert_eq!(Category::display_name(None), "Other");
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = Category::all().iter().map(|c| c.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 12);
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(Category::is_valid_slug("housing"));
        assert!(!Category::is_valid_slug("Housing"));
    }
}
