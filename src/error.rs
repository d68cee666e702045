//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the ledger and its
//! surrounding layers using thiserror.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger file
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The persisted ledger could not be read or is malformed
    #[error("Failed to read ledger: {0}")]
    StorageRead(String),

    /// The ledger could not be persisted
    #[error("Failed to write ledger: {0}")]
    StorageWrite(String),

    /// Rejected user input (non-positive amount, empty category, bad date)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Positional delete outside the current ledger
    #[error("Row index {index} is out of range (ledger has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Aggregation requested over an empty view
    #[error("Cannot summarize an empty set of expenses")]
    EmptyAggregation,

    /// A sum of amounts does not fit in the money type
    #[error("Total of the selected expenses is too large to compute")]
    AmountOverflow,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the ledger file
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead(_) | Self::StorageWrite(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
