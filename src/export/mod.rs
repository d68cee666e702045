//! Export module for the expense tracker
//!
//! - CSV: the ledger layout, spreadsheet-compatible
//! - JSON: expenses plus summary, machine-readable
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
