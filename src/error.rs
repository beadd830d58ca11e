use thiserror::Error;

use crate::domain::error::ConstraintViolation;
use crate::domain::id::ExpenseId;

#[derive(Error, Debug)]
pub enum Error {
    /// A required-field or length rule was violated on write.
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),

    /// A lookup, update, or delete addressed an id with no record behind it.
    #[error("expense {0} not found")]
    NotFound(ExpenseId),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

        match err {
            DieselError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
                    Error::Constraint(ConstraintViolation::Backend(info.message().to_string()))
                }
                _ => Error::Database(info.message().to_string()),
            },
            other => Error::Database(other.to_string()),
        }
    }
}
