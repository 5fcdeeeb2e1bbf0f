//! Error types for the schedule loader

use persistence::PersistenceError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors that can occur while loading or querying the schedule
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The schedule file could not be opened
    #[error("Cannot open schedule file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row is missing a column or is otherwise malformed
    #[error("Malformed schedule file: {0}")]
    Csv(#[from] csv::Error),

    /// Writing to the schedule store failed
    #[error("Storage error: {0}")]
    Storage(#[from] PersistenceError),

    /// A query date is not in `YYYY-M-D` form or does not exist
    #[error("Invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}

impl LoaderError {
    /// Create a new invalid date error
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate { input: input.into(), reason: reason.into() }
    }
}
