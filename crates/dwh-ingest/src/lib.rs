//! Source loading for the clinic warehouse.
//!
//! Reads the cleaned patient and appointment CSV files into Polars
//! DataFrames. Every column is read as text and empty cells become nulls,
//! so the transform sees exactly what the file contains.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dwh_ingest::read_source_table;
//!
//! let patients = read_source_table(Path::new("datasets_limpios/pacientes_limpio.csv"), "pacientes")?;
//! println!("{} rows", patients.record_count());
//! ```

mod csv;
mod error;
mod table;

pub use csv::{read_csv_table, validate_encoding};
pub use error::{LoadError, Result};
pub use table::{SourceTable, read_source_table};
