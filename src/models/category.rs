//! Expense categories
//!
//! The category set is fixed: every expense belongs to exactly one of
//! Food, Transport, Entertainment, Utilities or Others. Views can narrow the
//! table with a `CategoryFilter`, where `All` is the "no filter" sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// One of the fixed expense categories
///
/// The declaration order is the sort order used by category reports. Stored
/// names are read with the same case-insensitive rules as typed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Others,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Others,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    /// Parse a category name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ExpenseError::unknown_category(trimmed))
    }
}

impl TryFrom<String> for Category {
    type Error = ExpenseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Narrows an expense table to one category, or keeps everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// The "All" sentinel: no filtering
    #[default]
    All,
    /// Keep only records in this category
    Only(Category),
}

impl CategoryFilter {
    /// Label used for the sentinel in option lists
    pub const ALL_LABEL: &'static str = "All";

    /// Check whether a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", Self::ALL_LABEL),
            Self::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" UTILITIES ".parse::<Category>().unwrap(), Category::Utilities);
    }

    #[test]
    fn test_unknown_category_is_validation_error() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Unknown category: Groceries");
    }

    #[test]
    fn test_deserialize_matches_parse() {
        let parsed: Vec<Category> = serde_json::from_str(r#"["food", "TRANSPORT", "Others"]"#).unwrap();
        assert_eq!(parsed, vec![Category::Food, Category::Transport, Category::Others]);
        assert!(serde_json::from_str::<Category>(r#""Rent""#).is_err());
        assert_eq!(serde_json::to_string(&Category::Utilities).unwrap(), r#""Utilities""#);
    }

    #[test]
    fn test_ordering_follows_declaration() {
        assert!(Category::Food < Category::Transport);
        assert!(Category::Utilities < Category::Others);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Transport".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Transport)
        );
        assert!("Rent".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Others));
        assert!(CategoryFilter::Only(Category::Food).matches(Category::Food));
        assert!(!CategoryFilter::Only(Category::Food).matches(Category::Transport));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::from(Category::Entertainment).to_string(), "Entertainment");
    }
}
