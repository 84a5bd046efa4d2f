//! Persistence layer.
//!
//! Tasks live in a single CSV file; see [`tasks`] for the row layout.

pub mod tasks;
