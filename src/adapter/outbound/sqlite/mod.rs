//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed implementation of the expense store using
//! Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteExpenseStore;
