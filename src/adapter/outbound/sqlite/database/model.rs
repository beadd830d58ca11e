//! Database row types for Diesel ORM.

use diesel::prelude::*;

use super::schema::expense;

/// Database row for an expense (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = expense)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseRow {
    pub id: i32,
    pub value: f64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub observation: String,
}

/// Database row for an expense (insertable).
///
/// Carries no id column so the backend assigns one.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = expense)]
pub struct NewExpenseRow {
    pub value: f64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub observation: String,
}

/// Changeset for a partial expense update.
///
/// `None` fields leave the corresponding column untouched.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = expense)]
pub struct ExpenseChangeset {
    pub value: Option<f64>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub observation: Option<String>,
}
