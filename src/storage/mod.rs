//! Storage layer for the expense tracker
//!
//! The ledger is a single CSV file, read whole at startup and rewritten
//! whole (atomically) after every mutation. There is no locking: two
//! sessions writing the same file race and the last writer wins.

pub mod expenses;
pub mod file_io;

pub use expenses::{parse_csv, parse_date, read_expenses, write_csv, write_expenses, HEADER};
pub use file_io::{read_if_exists, write_atomic};
