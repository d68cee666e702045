//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{validate_date_format, Settings, DEFAULT_DATE_FORMAT};
