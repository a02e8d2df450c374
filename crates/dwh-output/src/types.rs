//! Output-related types for warehouse export.

use polars::prelude::DataFrame;

/// A derived table ready to be written.
#[derive(Debug, Clone)]
pub struct OutputTable {
    /// Table name, also the file stem (e.g. `dim_paciente`).
    pub name: String,

    /// Table contents in export column order.
    pub data: DataFrame,
}

impl OutputTable {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}
