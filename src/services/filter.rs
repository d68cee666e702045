//! Filtering the ledger by category set and date range

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};

/// Category and inclusive date-range constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Categories to keep; an empty set keeps nothing
    pub categories: BTreeSet<Category>,
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl ExpenseFilter {
    /// Create a filter
    pub fn new(
        categories: impl IntoIterator<Item = Category>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            start,
            end,
        }
    }

    /// The widest filter for a set of expenses: every category that occurs
    /// and the full span of their dates
    ///
    /// Returns `None` when there are no expenses to span.
    pub fn spanning(expenses: &[Expense]) -> Option<Self> {
        let start = expenses.iter().map(|e| e.date).min()?;
        let end = expenses.iter().map(|e| e.date).max()?;
        Some(Self::new(expenses.iter().map(|e| e.category), start, end))
    }

    /// Whether an expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        self.categories.contains(&expense.category)
            && expense.date >= self.start
            && expense.date <= self.end
    }

    /// Whether the filter can match anything at all
    pub fn is_satisfiable(&self) -> bool {
        !self.categories.is_empty() && self.start <= self.end
    }
}

/// A read-only subsequence of the ledger
///
/// Each entry keeps its position in the ledger it was taken from.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<(usize, &'a Expense)>,
}

impl<'a> FilteredView<'a> {
    /// Apply a filter to a ledger's records
    pub fn apply(expenses: &'a [Expense], filter: &ExpenseFilter) -> Self {
        if !filter.is_satisfiable() {
            return Self::default();
        }

        Self {
            rows: expenses
                .iter()
                .enumerate()
                .filter(|(_, e)| filter.matches(e))
                .collect(),
        }
    }

    /// A view of every record
    pub fn all(expenses: &'a [Expense]) -> Self {
        Self {
            rows: expenses.iter().enumerate().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Expenses in ledger order
    pub fn iter(&self) -> impl Iterator<Item = &'a Expense> + '_ {
        self.rows.iter().map(|(_, e)| *e)
    }

    /// Expenses with their ledger positions, in ledger order
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &'a Expense)> + '_ {
        self.rows.iter().copied()
    }

    /// Sum of amounts; zero for an empty view
    pub fn total(&self) -> ExpenseResult<Money> {
        Money::checked_sum(self.iter().map(|e| e.amount)).ok_or(ExpenseError::AmountOverflow)
    }

    /// Rows sorted newest first, ties kept in ledger order
    pub fn newest_first(&self) -> Vec<(usize, &'a Expense)> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.1.date.cmp(&a.1.date));
        rows
    }

    /// Owned copies of the expenses, in ledger order
    pub fn to_vec(&self) -> Vec<Expense> {
        self.iter().cloned().collect()
    }
}
