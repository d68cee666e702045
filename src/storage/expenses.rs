//! CSV codec for the ledger file
//!
//! Layout: header `Date,Category,Amount,Description,Id`, one row per expense.
//! `Date`, `Category` and `Amount` are required on read. `Description` and
//! `Id` may be absent; ledgers written before ids existed get fresh ones and
//! keep them from the next write on.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::error::ExpenseError;
use crate::models::{Category, Expense, ExpenseId, Money};

use super::file_io::{read_if_exists, write_atomic};

/// Column names in write order
pub const HEADER: [&str; 5] = ["Date", "Category", "Amount", "Description", "Id"];

const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Category", "Amount"];

#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Id")]
    id: String,
}

impl<'a> From<&'a Expense> for LedgerRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.label(),
            amount: expense.amount.to_string(),
            description: &expense.description,
            id: expense.id.to_string(),
        }
    }
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    category: usize,
    amount: usize,
    description: Option<usize>,
    id: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, ExpenseError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
        };

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ExpenseError::StorageRead(format!(
                "Missing required column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            date: find("Date").unwrap_or_default(),
            category: find("Category").unwrap_or_default(),
            amount: find("Amount").unwrap_or_default(),
            description: find("Description"),
            id: find("Id"),
        })
    }
}

/// Load the ledger file; a missing file is an empty ledger
pub fn read_expenses<P: AsRef<Path>>(path: P) -> Result<Vec<Expense>, ExpenseError> {
    let path = path.as_ref();
    match read_if_exists(path)? {
        Some(contents) => parse_csv(&contents)
            .map_err(|e| match e {
                ExpenseError::StorageRead(msg) => {
                    ExpenseError::StorageRead(format!("{}: {}", path.display(), msg))
                }
                other => other,
            }),
        None => Ok(Vec::new()),
    }
}

/// Rewrite the whole ledger file atomically
pub fn write_expenses<P: AsRef<Path>>(path: P, expenses: &[Expense]) -> Result<(), ExpenseError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, expenses)
        .map_err(|e| ExpenseError::StorageWrite(format!("Failed to encode ledger: {}", e)))?;
    write_atomic(path, &buffer)
}

/// Encode expenses in ledger format to any writer
pub fn write_csv<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(HEADER)?;
    for expense in expenses {
        writer.serialize(LedgerRow::from(expense))?;
    }
    writer.flush()?;
    Ok(())
}

/// Decode ledger CSV text
///
/// Categories are normalized as they are read. Rows repeating an id already
/// seen get a fresh one.
pub fn parse_csv(contents: &str) -> Result<Vec<Expense>, ExpenseError> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ExpenseError::StorageRead(format!("Invalid header row: {}", e)))?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut seen = HashSet::new();
    let mut expenses = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| ExpenseError::StorageRead(e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let mut expense = parse_row(&record, &columns)
            .map_err(|msg| ExpenseError::StorageRead(format!("line {}: {}", line, msg)))?;

        if !seen.insert(expense.id) {
            expense.id = ExpenseId::new();
            seen.insert(expense.id);
        }
        expenses.push(expense);
    }

    Ok(expenses)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<Expense, String> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let date = parse_date(field(columns.date))?;

    let category = Category::parse(field(columns.category)).map_err(|e| e.to_string())?;

    let amount = Money::parse(field(columns.amount)).map_err(|e| e.to_string())?;
    if !amount.is_positive() {
        return Err(format!("Amount must be greater than zero (got {})", amount));
    }

    let description = columns.description.map(field).unwrap_or("");

    let id = match columns.id.map(field).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<ExpenseId>()
            .map_err(|e| format!("Invalid id '{}': {}", raw, e))?,
        None => ExpenseId::new(),
    };

    Ok(Expense {
        id,
        date,
        category,
        amount,
        description: description.to_string(),
    })
}

/// Parse a calendar date, tolerating a trailing midnight time component
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| format!("Invalid date '{}' (expected YYYY-MM-DD)", raw))
}
