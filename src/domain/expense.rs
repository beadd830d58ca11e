//! The expense entity and its write payloads.
//!
//! This module provides the types that move through the expense store:
//!
//! - [`Expense`] - a persisted expense record
//! - [`NewExpense`] - the payload for creating a record
//! - [`ExpensePatch`] - a partial set of fields for updating a record
//!
//! Every field of an expense is required. The text fields carry declared
//! maximum lengths (category 45, description 128, observation 550
//! characters); the `validate` methods enforce them before a write reaches
//! the storage backend, so a rejected payload never touches the database.
//!
//! # Examples
//!
//! Building and validating a creation payload:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use expense_store::domain::NewExpense;
//!
//! let lunch = NewExpense::new(
//!     42.50,
//!     Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
//!     "Food",
//!     "Lunch",
//!     "Team lunch",
//! );
//!
//! assert!(lunch.validate().is_ok());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ConstraintViolation;
use super::id::ExpenseId;

/// Maximum length of the `category` field, in characters.
pub const CATEGORY_MAX_LEN: usize = 45;

/// Maximum length of the `description` field, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 128;

/// Maximum length of the `observation` field, in characters.
pub const OBSERVATION_MAX_LEN: usize = 550;

/// A persisted expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the storage backend. Immutable once assigned.
    pub id: ExpenseId,
    /// Monetary amount of the expense.
    pub value: f64,
    /// When the expense occurred.
    pub date: DateTime<Utc>,
    /// Spending category.
    pub category: String,
    /// Short description of the expense.
    pub description: String,
    /// Free-form note.
    pub observation: String,
}

/// Payload for creating an expense. Every field is required; there are no
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Monetary amount of the expense.
    pub value: f64,
    /// When the expense occurred.
    pub date: DateTime<Utc>,
    /// Spending category, at most [`CATEGORY_MAX_LEN`] characters.
    pub category: String,
    /// Short description, at most [`DESCRIPTION_MAX_LEN`] characters.
    pub description: String,
    /// Free-form note, at most [`OBSERVATION_MAX_LEN`] characters.
    pub observation: String,
}

impl NewExpense {
    /// Create a new expense payload.
    pub fn new(
        value: f64,
        date: DateTime<Utc>,
        category: impl Into<String>,
        description: impl Into<String>,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            value,
            date,
            category: category.into(),
            description: description.into(),
            observation: observation.into(),
        }
    }

    /// Check the text fields against their declared maximum lengths.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        check_len("category", &self.category, CATEGORY_MAX_LEN)?;
        check_len("description", &self.description, DESCRIPTION_MAX_LEN)?;
        check_len("observation", &self.observation, OBSERVATION_MAX_LEN)?;
        Ok(())
    }
}

/// A partial set of expense fields for an update.
///
/// `None` fields are left untouched by the update. The empty patch is a
/// no-op that reads back the current record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensePatch {
    /// Replacement monetary amount.
    pub value: Option<f64>,
    /// Replacement timestamp.
    pub date: Option<DateTime<Utc>>,
    /// Replacement category, at most [`CATEGORY_MAX_LEN`] characters.
    pub category: Option<String>,
    /// Replacement description, at most [`DESCRIPTION_MAX_LEN`] characters.
    pub description: Option<String>,
    /// Replacement note, at most [`OBSERVATION_MAX_LEN`] characters.
    pub observation: Option<String>,
}

impl ExpensePatch {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.observation.is_none()
    }

    /// Check the set text fields against their declared maximum lengths.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        if let Some(category) = &self.category {
            check_len("category", category, CATEGORY_MAX_LEN)?;
        }
        if let Some(description) = &self.description {
            check_len("description", description, DESCRIPTION_MAX_LEN)?;
        }
        if let Some(observation) = &self.observation {
            check_len("observation", observation, OBSERVATION_MAX_LEN)?;
        }
        Ok(())
    }
}

fn check_len(field: &'static str, text: &str, max: usize) -> Result<(), ConstraintViolation> {
    // Character count, not byte count: the limits come from VARCHAR(n)
    // column declarations.
    let len = text.chars().count();
    if len > max {
        return Err(ConstraintViolation::TooLong { field, max, len });
    }
    Ok(())
}
