//! Stable identifier for ledger entries
//!
//! Expenses are identified by a UUID assigned at creation time, so deleting
//! one entry never changes which entry another identifier refers to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its full UUID form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Short form shown in tables ("exp-" + first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether a user-typed reference (full UUID, short form, or bare
    /// hex prefix) points at this ID
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim().to_ascii_lowercase();
        let reference = reference
            .strip_prefix(DISPLAY_PREFIX)
            .unwrap_or(&reference)
            .replace('-', "");
        !reference.is_empty() && self.0.simple().to_string().starts_with(&reference)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

/// Full hyphenated UUID, as persisted
impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
