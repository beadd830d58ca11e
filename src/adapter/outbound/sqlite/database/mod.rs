//! Database layer for persistence using Diesel ORM.

pub mod connection;
pub mod model;
pub mod schema;
