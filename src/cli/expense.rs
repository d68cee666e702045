//! Expense CLI commands
//!
//! Implements the ledger commands: add, list, recent, delete, summary and
//! categories.

use chrono::Local;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_expense_line, format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, LEGACY_ALIASES};
use crate::reports::aggregate_totals;
use crate::services::{parse_amount, parse_date, CreateExpenseInput, ExpenseFilter, Ledger};

/// Category and date-range options shared by the reading commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only include these categories (repeatable); defaults to every category in use
    #[arg(short = 'C', long = "category")]
    pub categories: Vec<String>,
    /// Start date (YYYY-MM-DD), inclusive; defaults to the earliest expense
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive; defaults to the latest expense
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Build the filter against the current ledger
    ///
    /// Returns `None` for an empty ledger, which has no default range.
    pub fn resolve(&self, ledger: &Ledger) -> ExpenseResult<Option<ExpenseFilter>> {
        let Some(mut filter) = ledger.default_filter() else {
            return Ok(None);
        };

        if !self.categories.is_empty() {
            filter.categories = self
                .categories
                .iter()
                .map(|label| {
                    Category::parse(label).map_err(|e| ExpenseError::Validation(e.to_string()))
                })
                .collect::<ExpenseResult<_>>()?;
        }
        if let Some(from) = &self.from {
            filter.start = parse_date(from)?;
        }
        if let Some(to) = &self.to {
            filter.end = parse_date(to)?;
        }

        Ok(Some(filter))
    }
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "120" or "120.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Rent, "Travel & Transport", Shopping, Bills, Entertainment, Other)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Maximum number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the most recent expenses
    Recent {
        /// Number of rows (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Delete an expense by ID, or by row index with --index
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full or the short "exp-" form shown by list)
        id: Option<String>,
        /// Row index as shown in the "#" column (positions shift after a delete)
        #[arg(long, conflicts_with = "id")]
        index: Option<usize>,
    },

    /// Show totals, monthly trend and category breakdown
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the available categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };

            let expense = ledger.add(CreateExpenseInput {
                date,
                category,
                amount,
                description,
            })?;

            println!("Expense added: {}", format_expense_line(&expense, symbol));
        }

        ExpenseCommands::List { filter, limit } => {
            let Some(filter) = filter.resolve(ledger)? else {
                println!("No expense data yet. Add one with 'expense add'.");
                return Ok(());
            };

            let view = ledger.filter(&filter);
            let mut rows = view.newest_first();
            if let Some(limit) = limit {
                rows.truncate(limit);
            }
            print!("{}", format_expense_table(&rows, symbol, date_format));
            if !rows.is_empty() {
                println!(
                    "{} of {} expense(s), total {}",
                    rows.len(),
                    view.len(),
                    view.total()?.format_grouped(symbol)
                );
            }
        }

        ExpenseCommands::Recent { count } => {
            let rows = ledger.recent(count.unwrap_or(settings.recent_count));
            print!("{}", format_expense_table(&rows, symbol, date_format));
        }

        ExpenseCommands::Delete { id, index } => {
            let removed = match (id, index) {
                (Some(reference), _) => {
                    let id = ledger.find(&reference)?.id;
                    Some(ledger.delete_by_id(id)?)
                }
                (None, selection) => ledger.delete_at(selection)?,
            };

            match removed {
                Some(expense) => {
                    println!("Deleted: {}", format_expense_line(&expense, symbol));
                }
                None => {
                    println!("Please select an expense to delete (an ID or --index).");
                }
            }
        }

        ExpenseCommands::Summary { filter } => {
            let Some(filter) = filter.resolve(ledger)? else {
                println!("No expense data yet. Add one with 'expense add'.");
                return Ok(());
            };

            let view = ledger.filter(&filter);
            if view.is_empty() {
                println!("No data available for the selected filters.");
                return Ok(());
            }

            let summary = aggregate_totals(&view)?;
            print!("{}", format_summary(&summary, symbol));
            println!();
            println!("List of Expenses");
            print!(
                "{}",
                format_expense_table(&view.newest_first(), symbol, date_format)
            );
        }

        ExpenseCommands::Categories => {
            println!("Categories:");
            for category in Category::ALL {
                println!("  {}", category);
            }
            println!();
            println!("Legacy labels accepted and merged:");
            for (legacy, canonical) in LEGACY_ALIASES {
                println!("  {} -> {}", legacy, canonical);
            }
        }
    }

    for failure in ledger.take_audit_failures() {
        eprintln!(
            "Warning: the change was saved, but the audit log was not updated: {}",
            failure
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ledger_with_data() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(temp_dir.path().join("expense_data.csv")).unwrap();
        for (day, category, cents) in [(10, "Food", 5000), (20, "Rent", 90000), (25, "Travel", 1500)] {
            ledger
                .add(CreateExpenseInput {
                    date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    category: category.to_string(),
                    amount: Money::from_cents(cents),
                    description: None,
                })
                .unwrap();
        }
        (temp_dir, ledger)
    }

    #[test]
    fn test_filter_defaults_span_ledger() {
        let (_temp, ledger) = ledger_with_data();
        let filter = FilterArgs::default().resolve(&ledger).unwrap().unwrap();

        assert_eq!(filter.start, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(filter.end, NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());
        assert_eq!(filter.categories.len(), 3);
    }

    #[test]
    fn test_filter_overrides() {
        let (_temp, ledger) = ledger_with_data();
        let args = FilterArgs {
            categories: vec!["transport".into()],
            from: Some("2024-01-15".into()),
            to: None,
        };
        let filter = args.resolve(&ledger).unwrap().unwrap();

        assert_eq!(
            filter.categories.iter().copied().collect::<Vec<_>>(),
            vec![Category::TravelTransport]
        );
        assert_eq!(ledger.filter(&filter).len(), 1);
    }

    #[test]
    fn test_filter_rejects_unknown_category() {
        let (_temp, ledger) = ledger_with_data();
        let args = FilterArgs {
            categories: vec!["Pets".into()],
            ..FilterArgs::default()
        };
        assert!(args.resolve(&ledger).unwrap_err().is_validation());
    }

    #[test]
    fn test_filter_on_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::load(temp_dir.path().join("expense_data.csv")).unwrap();
        assert!(FilterArgs::default().resolve(&ledger).unwrap().is_none());
    }

    #[test]
    fn test_delete_without_selection_keeps_rows() {
        let (_temp, mut ledger) = ledger_with_data();
        handle_expense_command(
            &mut ledger,
            &Settings::default(),
            ExpenseCommands::Delete {
                id: None,
                index: None,
            },
        )
        .unwrap();
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp, mut ledger) = ledger_with_data();
        let err = handle_expense_command(
            &mut ledger,
            &Settings::default(),
            ExpenseCommands::Add {
                amount: "0".into(),
                category: "Food".into(),
                date: None,
                description: None,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.len(), 3);
    }
}
