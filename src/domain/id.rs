//! Identifier types for persisted records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expense identifier - newtype for type safety.
///
/// Wraps the integer primary key assigned by the storage backend. The inner
/// value is private so construction goes through the defined constructors;
/// an id is never reassigned or reused once handed out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ExpenseId(i32);

impl ExpenseId {
    /// Create an `ExpenseId` from a raw database id.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ExpenseId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}
