//! Errors
//!
//! Custom error types used throughout the `driftwatch` crate.
use thiserror::Error;

/// Errors that can occur while validating a pair of datasets.
#[derive(Debug, Error)]
pub enum DriftwatchError {
    /// Schema file missing or malformed.
    #[error("Unable to load schema from {0}: {1}")]
    InvalidSchema(String, String),
    /// Dataset file missing or not parseable as delimited data.
    #[error("Unable to read dataset from {0}: {1}")]
    UnableToRead(String, String),
    /// Aggregated structural check failures, one line per failed check.
    #[error("Dataset validation failed:\n{0}")]
    FailedValidation(String),
    /// A column of the base dataset has no counterpart in the current dataset.
    #[error("Column {0} is missing from the current dataset.")]
    ColumnMissing(String),
    /// A column has no values to run a two-sample test on.
    #[error("Column {0} is empty, cannot run a two-sample test.")]
    EmptyColumn(String),
    /// Unable to write an output file.
    #[error("Unable to write {0}: {1}")]
    UnableToWrite(String, String),
}
