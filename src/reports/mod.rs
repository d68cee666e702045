//! Reports module for the expense tracker
//!
//! Derived values computed over a filtered view. Nothing here is persisted.

pub mod summary;

pub use summary::{aggregate_totals, CategoryShare, MonthlyTotal, Summary};
