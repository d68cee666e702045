//! YAML export
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::json::ExpenseExport;

/// Write the export as YAML with a short comment header
pub fn export_yaml<W: Write>(export: &ExpenseExport, writer: &mut W) -> ExpenseResult<()> {
    let to_export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use crate::services::FilteredView;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let expenses = vec![Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::TravelTransport,
            Money::from_cents(12000),
        )
        .with_description("taxi")];
        let export = ExpenseExport::from_view(&FilteredView::all(&expenses), None).unwrap();

        let mut buffer = Vec::new();
        export_yaml(&export, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Expense Tracker Export"));
        assert!(text.contains("Travel & Transport"));
        assert!(text.contains("description: taxi"));

        let parsed: ExpenseExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.expenses[0].category, Category::TravelTransport);
        assert_eq!(parsed.summary.unwrap().top_category, Category::TravelTransport);
    }
}
