//! Expense categories
//!
//! The category set is fixed. Older ledgers used separate "Travel" and
//! "Transport" labels; both are folded into "Travel & Transport" every time
//! a label is read or written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legacy labels and the canonical label they map to
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("Travel", "Travel & Transport"),
    ("Transport", "Travel & Transport"),
];

/// One of the fixed expense categories
///
/// Declaration order is the canonical order: it drives listing order and
/// breaks ties when picking the top category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    #[serde(rename = "Travel & Transport")]
    TravelTransport,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Rent,
        Category::TravelTransport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    /// The label persisted in the ledger file
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::TravelTransport => "Travel & Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Parse a label, applying legacy normalization first
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn parse(label: &str) -> Result<Self, CategoryParseError> {
        let normalized = normalize_label(label);
        if normalized.is_empty() {
            return Err(CategoryParseError::Empty);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| CategoryParseError::Unknown(label.trim().to_string()))
    }
}

/// Map a legacy label to its canonical form; other labels pass through trimmed
///
/// Idempotent: `normalize_label(normalize_label(x)) == normalize_label(x)`.
pub fn normalize_label(label: &str) -> &str {
    let label = label.trim();
    LEGACY_ALIASES
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(label))
        .map(|(_, canonical)| *canonical)
        .unwrap_or(label)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Category cannot be empty"),
            Self::Unknown(label) => write!(
                f,
                "Unknown category '{}' (expected one of: {})",
                label,
                Category::ALL
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}
