//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, schema bootstrap, and connection
//! configuration for SQLite databases.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use tracing::debug;

use crate::error::{Error, Result};

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(5)
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Create the expense table if it does not exist yet.
///
/// Idempotent, so it can run on every startup. `AUTOINCREMENT` keeps
/// assigned ids strictly increasing and never reused, and the `CHECK`
/// clauses hold the declared length limits on the backend side.
///
/// # Errors
/// Returns an error if the statement fails.
pub fn init_schema(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            value DOUBLE NOT NULL,
            date TEXT NOT NULL,
            category TEXT NOT NULL CHECK (length(category) <= 45),
            description TEXT NOT NULL CHECK (length(description) <= 128),
            observation TEXT NOT NULL CHECK (length(observation) <= 550)
        )",
    )
    .execute(&mut conn)?;

    debug!("expense schema ready");
    Ok(())
}

/// Configure SQLite connection pragmas used for concurrent writers.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    Ok(())
}
