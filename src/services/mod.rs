//! Service layer for the expense tracker
//!
//! The ledger service applies validation and normalization on top of the
//! storage layer; the filter types select the subsets that reports run on.

pub mod filter;
pub mod ledger;

pub use filter::{ExpenseFilter, FilteredView};
pub use ledger::{parse_amount, parse_date, CreateExpenseInput, Ledger};
