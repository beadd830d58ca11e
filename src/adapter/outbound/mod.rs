//! Outbound adapters for persistence.

pub mod sqlite;
