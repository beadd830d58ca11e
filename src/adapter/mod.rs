//! Adapter implementations for the crate's ports.

pub mod outbound;
