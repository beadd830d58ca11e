//! Store port for persistence operations.
//!
//! This module defines the trait an expense storage backend implements,
//! decoupling the entity definition from any specific persistence framework.

use std::future::Future;

use crate::domain::{Expense, ExpenseId, ExpensePatch, NewExpense};
use crate::error::Result;

/// Storage operations for expenses.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Methods return futures that can be awaited
/// - Each mutation commits fully or leaves the record set unchanged
pub trait ExpenseStore: Send + Sync {
    /// Persist a new expense and return it with its assigned id.
    ///
    /// Ids are unique and strictly increasing across successive creates.
    /// Fails with [`Error::Constraint`](crate::error::Error::Constraint)
    /// when a text field exceeds its declared maximum length; nothing is
    /// persisted in that case.
    fn create(&self, expense: &NewExpense) -> impl Future<Output = Result<Expense>> + Send;

    /// Get an expense by id.
    ///
    /// Fails with [`Error::NotFound`](crate::error::Error::NotFound) for an
    /// id with no record behind it.
    fn get(&self, id: ExpenseId) -> impl Future<Output = Result<Expense>> + Send;

    /// Overwrite the fields set in `patch` and return the updated record.
    ///
    /// Same constraint failure mode as [`create`](Self::create), plus
    /// `NotFound` for unknown ids. An empty patch reads the current record.
    fn update(
        &self,
        id: ExpenseId,
        patch: &ExpensePatch,
    ) -> impl Future<Output = Result<Expense>> + Send;

    /// Delete an expense by id. Fails with `NotFound` for unknown ids.
    fn delete(&self, id: ExpenseId) -> impl Future<Output = Result<()>> + Send;

    /// List all expenses in id order.
    fn list(&self) -> impl Future<Output = Result<Vec<Expense>>> + Send;
}
