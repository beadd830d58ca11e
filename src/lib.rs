//! Expense persistence with environment-driven configuration.
//!
//! This crate is the storage layer of an expense tracker: a single persisted
//! entity ([`domain::Expense`]) exposed through the [`port::ExpenseStore`]
//! repository trait, with a SQLite implementation backed by the Diesel ORM.
//!
//! # Modules
//!
//! - [`config`] - Settings read from the process environment and a local `.env` file
//! - [`domain`] - The `Expense` entity, its write payloads, and validation
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definition for expense storage backends
//! - [`adapter`] - SQLite storage implementation
//!
//! # Example
//!
//! ```no_run
//! use expense_store::adapter::outbound::sqlite::database::connection::{create_pool, init_schema};
//! use expense_store::adapter::outbound::sqlite::SqliteExpenseStore;
//! use expense_store::config::Settings;
//!
//! # fn main() -> expense_store::error::Result<()> {
//! let settings = Settings::load();
//! settings.logging.init();
//!
//! let url = settings.database_url().unwrap_or_else(|| "expenses.db".into());
//! let pool = create_pool(&url)?;
//! init_schema(&pool)?;
//! let _store = SqliteExpenseStore::new(pool);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
