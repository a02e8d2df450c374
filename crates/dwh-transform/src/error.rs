//! Error types for the dimensional transform.

use thiserror::Error;

/// Errors that make the star schema meaningless to build or export.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A source table lacks a column the transform projects or joins on.
    #[error("required column '{column}' not found in {table}")]
    MissingColumn { table: String, column: String },

    /// Dates were present in the sources but none of them parsed.
    #[error("none of the {values} distinct date values could be parsed")]
    NoParseableDates { values: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
