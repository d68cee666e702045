//! Display formatting for terminal output
//!
//! Turns ledger rows and summaries into tables and text charts. No business
//! rules live here.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_line, format_expense_table};
pub use summary::{format_category_chart, format_kpis, format_monthly_chart, format_summary};
