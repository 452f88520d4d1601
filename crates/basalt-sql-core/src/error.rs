//! Error types for statement synthesis and row processing.

use thiserror::Error;

/// Errors surfaced by the synthesis engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A record lacks a column the schema marks as required, or carries a
    /// null where a value is mandatory.
    #[error("missing required column: {0}")]
    MissingRequiredColumn(String),

    /// A join description did not name exactly two tables with exactly one
    /// of them the statement's primary table.
    #[error("invalid join spec: {0}")]
    InvalidJoinSpec(String),

    /// An insert was given no rows, so no column list can be derived.
    #[error("insert requires at least one row")]
    EmptyRows,
}

/// Result type alias for synthesis operations.
pub type Result<T> = std::result::Result<T, Error>;
