//! Expense ledger service
//!
//! Owns the in-memory expense list and keeps the ledger file in sync with it.
//! Every mutation builds the next state, writes it to disk, and only then
//! replaces the in-memory list, so a rejected or failed operation leaves the
//! ledger as it was.
//!
//! Audit entries are written after the ledger file. A failed audit write does
//! not undo or fail the mutation; it is kept for the caller to report through
//! [`Ledger::take_audit_failures`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage;

use super::filter::{ExpenseFilter, FilteredView};

/// Input for adding an expense, as collected from the user
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    /// Category label; legacy labels are accepted and normalized
    pub category: String,
    pub amount: Money,
    pub description: Option<String>,
}

/// The expense ledger bound to its backing file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
    audit_failures: Vec<ExpenseError>,
}

impl Ledger {
    /// Load the ledger from `path`, or start empty if the file doesn't exist
    ///
    /// Fails with `StorageRead` when the file is malformed.
    pub fn load(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();
        let expenses = storage::read_expenses(&path)?;
        Ok(Self {
            path,
            expenses,
            audit: None,
            audit_failures: Vec::new(),
        })
    }

    /// Record every mutation in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All expenses in stored order
    pub fn records(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Current position of an expense
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Resolve a user-typed reference (full id, `exp-` short form or hex prefix)
    pub fn find(&self, reference: &str) -> ExpenseResult<&Expense> {
        let mut matches = self.expenses.iter().filter(|e| e.id.matches(reference));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (None, _) => Err(ExpenseError::expense_not_found(reference)),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "'{}' matches more than one expense; use a longer id",
                reference
            ))),
        }
    }

    /// Add an expense and persist the ledger
    ///
    /// Fails with `Validation` for a non-positive amount or an empty or
    /// unknown category; nothing is changed in that case.
    pub fn add(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let category = Category::parse(&input.category)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut expense = Expense::new(input.date, category, input.amount);
        if let Some(description) = input.description {
            expense = expense.with_description(description);
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut next = self.expenses.clone();
        next.push(expense.clone());
        self.commit(next)?;

        self.audit(AuditEntry::create(&expense));
        Ok(expense)
    }

    /// Delete by position in the current ledger
    ///
    /// `None` means nothing was selected and is a no-op returning `Ok(None)`.
    /// Positions are not stable: after a delete, every later record moves
    /// up by one.
    pub fn delete_at(&mut self, selection: Option<usize>) -> ExpenseResult<Option<Expense>> {
        let Some(index) = selection else {
            return Ok(None);
        };

        if index >= self.expenses.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }

        let mut next = self.expenses.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        self.audit(AuditEntry::delete(&removed));
        Ok(Some(removed))
    }

    /// Delete by stable identifier
    pub fn delete_by_id(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let mut next = self.expenses.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        self.audit(AuditEntry::delete(&removed));
        Ok(removed)
    }

    /// Records matching the filter, in stored order
    pub fn filter(&self, filter: &ExpenseFilter) -> FilteredView<'_> {
        FilteredView::apply(&self.expenses, filter)
    }

    /// Filter using primitive constraints
    pub fn filter_by(
        &self,
        categories: impl IntoIterator<Item = Category>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FilteredView<'_> {
        self.filter(&ExpenseFilter::new(categories, start, end))
    }

    /// Filter covering every record; `None` for an empty ledger
    pub fn default_filter(&self) -> Option<ExpenseFilter> {
        ExpenseFilter::spanning(&self.expenses)
    }

    /// The `n` most recent expenses, newest first
    pub fn recent(&self, n: usize) -> Vec<(usize, &Expense)> {
        let mut rows = FilteredView::all(&self.expenses).newest_first();
        rows.truncate(n);
        rows
    }

    /// Distinct categories in use, in canonical order
    pub fn categories_present(&self) -> BTreeSet<Category> {
        self.expenses.iter().map(|e| e.category).collect()
    }

    /// Earliest and latest expense dates
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.default_filter().map(|f| (f.start, f.end))
    }

    /// Write the current state to the backing file
    pub fn save(&self) -> ExpenseResult<()> {
        storage::write_expenses(&self.path, &self.expenses)
    }

    /// Rewrite the file, then adopt `next` as the current state
    fn commit(&mut self, next: Vec<Expense>) -> ExpenseResult<()> {
        storage::write_expenses(&self.path, &next)?;
        self.expenses = next;
        Ok(())
    }

    /// Audit writes that failed since the last call, oldest first
    ///
    /// The mutations they belong to were saved.
    pub fn take_audit_failures(&mut self) -> Vec<ExpenseError> {
        std::mem::take(&mut self.audit_failures)
    }

    fn audit(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                self.audit_failures.push(e);
            }
        }
    }
}

/// Parse a user-supplied date with the same rules as the ledger reader
pub fn parse_date(raw: &str) -> ExpenseResult<NaiveDate> {
    storage::parse_date(raw).map_err(ExpenseError::Validation)
}

/// Parse a user-supplied amount
pub fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    Money::parse(raw).map_err(|e| {
        ExpenseError::Validation(format!(
            "{}. Use a number like '120' or '120.50'",
            e
        ))
    })
}
