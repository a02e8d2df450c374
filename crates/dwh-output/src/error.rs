//! Error types for warehouse export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing derived tables.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temporary file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Finished temporary file could not replace the target.
    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to serialize the table.
    #[error("failed to serialize table {table}: {message}")]
    DataFrame { table: String, message: String },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
