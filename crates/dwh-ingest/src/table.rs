//! Named source tables.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::csv::read_csv_table;
use crate::error::Result;

/// A loaded source file together with its logical name and origin.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// Logical name used in logs and errors (e.g. "pacientes").
    pub name: String,
    /// File the table was read from.
    pub path: PathBuf,
    /// Table contents, every column as nullable text.
    pub data: DataFrame,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            data,
        }
    }

    /// Returns the number of records in the table.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Loads the CSV file at `path` as the source table `name`.
pub fn read_source_table(path: &Path, name: &str) -> Result<SourceTable> {
    debug!(source = name, path = %path.display(), "reading source");
    let data = read_csv_table(path)?;
    let table = SourceTable::new(name, path, data);
    info!(
        source = name,
        records = table.record_count(),
        columns = table.data.width(),
        "source loaded"
    );
    Ok(table)
}
