//! Domain types for the expense tracker.
//!
//! Everything here is backend-agnostic: the entity, its write payloads, the
//! identifier newtype, and the validation errors they produce.

pub mod error;
pub mod expense;
pub mod id;

pub use error::ConstraintViolation;
pub use expense::{Expense, ExpensePatch, NewExpense};
pub use id::ExpenseId;
