//! JSON export
//!
//! Exports a filtered set of expenses together with its summary.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;
use crate::reports::{aggregate_totals, Summary};
use crate::services::{ExpenseFilter, FilteredView};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Filter the expenses were selected with, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ExportedFilter>,

    /// Selected expenses, in ledger order
    pub expenses: Vec<ExportedExpense>,

    /// Aggregates over the selection; absent when nothing was selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ExportedSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedFilter {
    pub categories: Vec<Category>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedExpense {
    pub id: String,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedSummary {
    pub total: f64,
    pub count: usize,
    pub top_category: Category,
    pub by_category: BTreeMap<String, f64>,
    pub by_month: BTreeMap<String, f64>,
}

impl From<&Summary> for ExportedSummary {
    fn from(summary: &Summary) -> Self {
        Self {
            total: summary.total.as_f64(),
            count: summary.count,
            top_category: summary.top_category,
            by_category: summary
                .by_category
                .iter()
                .map(|(c, m)| (c.label().to_string(), m.as_f64()))
                .collect(),
            by_month: summary
                .by_month
                .iter()
                .map(|(k, m)| (k.clone(), m.as_f64()))
                .collect(),
        }
    }
}

impl ExpenseExport {
    /// Build an export document from a view
    ///
    /// An empty view exports without a summary.
    pub fn from_view(
        view: &FilteredView<'_>,
        filter: Option<&ExpenseFilter>,
    ) -> ExpenseResult<Self> {
        let summary = match aggregate_totals(view) {
            Ok(summary) => Some(ExportedSummary::from(&summary)),
            Err(ExpenseError::EmptyAggregation) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filter.map(|f| ExportedFilter {
                categories: f.categories.iter().copied().collect(),
                start: f.start,
                end: f.end,
            }),
            expenses: view
                .iter()
                .map(|e| ExportedExpense {
                    id: e.id.to_string(),
                    date: e.date,
                    category: e.category,
                    amount: e.amount.as_f64(),
                    description: e.description.clone(),
                })
                .collect(),
            summary,
        })
    }
}

/// Write the export as JSON
pub fn export_json<W: Write>(
    export: &ExpenseExport,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
