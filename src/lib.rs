//! Expense Tracker - personal expense ledger backed by a CSV file
//!
//! This library provides the core functionality for the `expense` command:
//! recording expenses, filtering them by category and date range, and
//! summarizing spending by category and month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, ids)
//! - `storage`: CSV ledger file storage
//! - `services`: Ledger operations and filtering
//! - `reports`: Aggregation over filtered views
//! - `display`: Text rendering for the terminal
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{TrackerPaths, Settings};
//! use expense_tracker::services::Ledger;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::load(settings.ledger_path(&paths))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
