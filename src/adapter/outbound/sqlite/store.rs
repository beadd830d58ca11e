//! SQLite expense store implementation.
//!
//! Provides persistent storage for expense records using SQLite and Diesel
//! ORM. Every mutation runs inside a transaction that commits on success and
//! rolls back on any constraint violation.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    ExpenseChangeset, ExpenseRow, NewExpenseRow,
};
use crate::adapter::outbound::sqlite::database::schema::expense;
use crate::domain::{Expense, ExpenseId, ExpensePatch, NewExpense};
use crate::error::{Error, Result};
use crate::port::ExpenseStore;

diesel::define_sql_function! {
    /// Rowid of the most recent successful insert on this connection.
    fn last_insert_rowid() -> BigInt;
}

/// SQLite-backed expense store.
///
/// Implements the [`ExpenseStore`] trait for persistent storage of expense
/// records.
pub struct SqliteExpenseStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteExpenseStore {
    /// Create a new SQLite expense store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_new_row(new_expense: &NewExpense) -> NewExpenseRow {
        NewExpenseRow {
            value: new_expense.value,
            date: new_expense.date.to_rfc3339(),
            category: new_expense.category.clone(),
            description: new_expense.description.clone(),
            observation: new_expense.observation.clone(),
        }
    }

    fn to_changeset(patch: &ExpensePatch) -> ExpenseChangeset {
        ExpenseChangeset {
            value: patch.value,
            date: patch.date.map(|date| date.to_rfc3339()),
            category: patch.category.clone(),
            description: patch.description.clone(),
            observation: patch.observation.clone(),
        }
    }

    fn from_row(row: ExpenseRow) -> Result<Expense> {
        let date: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.date)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Expense {
            id: ExpenseId::new(row.id),
            value: row.value,
            date,
            category: row.category,
            description: row.description,
            observation: row.observation,
        })
    }
}

impl ExpenseStore for SqliteExpenseStore {
    async fn create(&self, new_expense: &NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        let row = Self::to_new_row(new_expense);

        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let stored = conn.transaction::<ExpenseRow, Error, _>(|conn| {
            diesel::insert_into(expense::table)
                .values(&row)
                .execute(conn)?;

            let id = diesel::select(last_insert_rowid()).get_result::<i64>(conn)?;
            let id = i32::try_from(id).map_err(|e| Error::Parse(e.to_string()))?;

            let stored: ExpenseRow = expense::table.find(id).first(conn)?;
            Ok(stored)
        })?;

        debug!(id = stored.id, "expense created");
        Self::from_row(stored)
    }

    async fn get(&self, id: ExpenseId) -> Result<Expense> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<ExpenseRow> = expense::table
            .find(id.value())
            .first(&mut conn)
            .optional()?;

        match row {
            Some(row) => Self::from_row(row),
            None => Err(Error::NotFound(id)),
        }
    }

    async fn update(&self, id: ExpenseId, patch: &ExpensePatch) -> Result<Expense> {
        patch.validate()?;

        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let stored = conn.transaction::<ExpenseRow, Error, _>(|conn| {
            if !patch.is_empty() {
                let changes = Self::to_changeset(patch);
                let affected = diesel::update(expense::table.find(id.value()))
                    .set(&changes)
                    .execute(conn)?;
                if affected == 0 {
                    return Err(Error::NotFound(id));
                }
            }

            let row: Option<ExpenseRow> =
                expense::table.find(id.value()).first(conn).optional()?;
            row.ok_or(Error::NotFound(id))
        })?;

        debug!(id = stored.id, "expense updated");
        Self::from_row(stored)
    }

    async fn delete(&self, id: ExpenseId) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(expense::table.find(id.value())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(Error::NotFound(id));
        }

        debug!(id = id.value(), "expense deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Expense>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<ExpenseRow> = expense::table
            .order(expense::id.asc())
            .load(&mut conn)?;

        rows.into_iter().map(Self::from_row).collect()
    }
}
