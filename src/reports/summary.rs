//! Expense summary
//!
//! Totals over a filtered view: overall spend, spend per category, spend per
//! calendar month and the category with the largest spend.

use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};
use crate::services::FilteredView;

/// Share of the total spent in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Money,
    /// Percentage of the summary total (0-100)
    pub percentage: f64,
}

/// Spend in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// "YYYY-MM"
    pub month: String,
    pub amount: Money,
}

/// Aggregates over a non-empty set of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Sum of all amounts
    pub total: Money,
    /// Number of expenses summarized
    pub count: usize,
    /// Sum per category, in canonical category order
    pub by_category: BTreeMap<Category, Money>,
    /// Sum per "YYYY-MM" month, chronological
    pub by_month: BTreeMap<String, Money>,
    /// Category with the largest sum; ties go to the earlier category in
    /// canonical order
    pub top_category: Category,
}

/// Summarize a filtered view
///
/// Fails with `EmptyAggregation` when the view has no expenses, since there
/// is no top category to report, and with `AmountOverflow` when a sum does
/// not fit.
pub fn aggregate_totals(view: &FilteredView<'_>) -> ExpenseResult<Summary> {
    if view.is_empty() {
        return Err(ExpenseError::EmptyAggregation);
    }

    let mut total = Money::zero();
    let mut by_category: BTreeMap<Category, Money> = BTreeMap::new();
    let mut by_month: BTreeMap<String, Money> = BTreeMap::new();

    for expense in view.iter() {
        total = add_amount(total, expense.amount)?;
        let category_sum = by_category.entry(expense.category).or_default();
        *category_sum = add_amount(*category_sum, expense.amount)?;
        let month_sum = by_month.entry(expense.month_key()).or_default();
        *month_sum = add_amount(*month_sum, expense.amount)?;
    }

    let mut top: Option<(Category, Money)> = None;
    for (&category, &amount) in &by_category {
        if top.map_or(true, |(_, best)| amount > best) {
            top = Some((category, amount));
        }
    }
    let (top_category, _) = top.ok_or(ExpenseError::EmptyAggregation)?;

    Ok(Summary {
        total,
        count: view.len(),
        by_category,
        by_month,
        top_category,
    })
}

impl Summary {
    /// Per-category amounts with their share of the total, largest first
    ///
    /// Equal amounts keep canonical category order.
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        let mut shares: Vec<CategoryShare> = self
            .by_category
            .iter()
            .map(|(&category, &amount)| CategoryShare {
                category,
                amount,
                percentage: percentage_of(amount, self.total),
            })
            .collect();
        shares.sort_by(|a, b| b.amount.cmp(&a.amount));
        shares
    }

    /// Month buckets in chronological order
    pub fn monthly_trend(&self) -> Vec<MonthlyTotal> {
        self.by_month
            .iter()
            .map(|(month, &amount)| MonthlyTotal {
                month: month.clone(),
                amount,
            })
            .collect()
    }

    /// Amount spent in the top category
    pub fn top_category_amount(&self) -> Money {
        self.by_category
            .get(&self.top_category)
            .copied()
            .unwrap_or_default()
    }
}

fn add_amount(sum: Money, amount: Money) -> ExpenseResult<Money> {
    sum.checked_add(amount).ok_or(ExpenseError::AmountOverflow)
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}
