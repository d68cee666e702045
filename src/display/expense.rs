//! Expense table formatting
//!
//! Renders expenses as terminal tables. The `#` column is the row's current
//! position in the ledger, which is what `delete --index` expects.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::{validate_date_format, DEFAULT_DATE_FORMAT};
use crate::models::Expense;

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format positioned expenses as a table
///
/// A `date_format` that cannot render a date falls back to `%Y-%m-%d`.
pub fn format_expense_table(
    rows: &[(usize, &Expense)],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let date_format = if validate_date_format(date_format).is_ok() {
        date_format
    } else {
        DEFAULT_DATE_FORMAT
    };

    let rows: Vec<ExpenseRow> = rows
        .iter()
        .map(|(index, expense)| ExpenseRow {
            index: *index,
            id: expense.id.short(),
            date: expense.date.format(date_format).to_string(),
            category: expense.category.label(),
            amount: expense.amount.format_with_symbol(currency_symbol),
            description: truncate(&expense.description, 40),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single expense for confirmation messages
pub fn format_expense_line(expense: &Expense, currency_symbol: &str) -> String {
    let mut line = format!(
        "{} {} {} {}",
        expense.id.short(),
        expense.date.format("%Y-%m-%d"),
        expense.category,
        expense.amount.format_with_symbol(currency_symbol)
    );
    if !expense.description.is_empty() {
        line.push_str(&format!(" - {}", expense.description));
    }
    line
}
