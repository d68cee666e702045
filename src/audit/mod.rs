//! Audit logging for the expense tracker
//!
//! Every add and delete on the ledger appends one JSON line to `audit.log`
//! with a UTC timestamp, the operation, and the expense as it was stored or
//! as it was before removal.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
