//! Warehouse export.
//!
//! Each derived table is written to `<output_dir>/<name>.csv` with a header
//! row. Existing files are replaced, and a file is only ever seen complete:
//! data goes to a temporary file in the same directory which is then renamed
//! over the target.

mod csv;
mod error;
mod types;

pub use csv::{ensure_output_dir, table_path, write_csv_table};
pub use error::{ExportError, Result};
pub use types::OutputTable;
