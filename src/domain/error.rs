//! Validation errors for the expense domain types.
//!
//! These errors are returned by the `validate` methods on write payloads
//! before anything reaches the storage backend, and by the backend itself
//! when a write slips past validation.

use thiserror::Error;

/// A required-field or length rule violated on write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A text field exceeds its declared maximum length.
    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Declared maximum length in characters.
        max: usize,
        /// Length of the provided value.
        len: usize,
    },

    /// The storage backend rejected the write.
    #[error("rejected by storage backend: {0}")]
    Backend(String),
}
