//! CSV export
//!
//! Writes the selected expenses in the ledger file layout, so an export can
//! be used directly as a ledger.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::FilteredView;
use crate::storage;

/// Export expenses to CSV, newest first
pub fn export_expenses_csv<W: Write>(view: &FilteredView<'_>, writer: &mut W) -> ExpenseResult<()> {
    let expenses: Vec<_> = view
        .newest_first()
        .into_iter()
        .map(|(_, e)| e.clone())
        .collect();

    storage::write_csv(writer, &expenses).map_err(|e| ExpenseError::Export(e.to_string()))
}
