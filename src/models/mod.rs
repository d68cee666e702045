//! Core data models for the expense tracker

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{normalize_label, Category, CategoryParseError, LEGACY_ALIASES};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
