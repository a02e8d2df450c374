//! Data model for the clinic appointments star schema.
//!
//! Source records mirror the cleaned patient and appointment CSV files.
//! Dimension and fact rows are what the transform crate derives from them.

pub mod dimension;
pub mod ids;
pub mod options;
pub mod records;
pub mod schema;

pub use dimension::{AppointmentFactRow, DateDimensionRow, PatientDimensionRow};
pub use ids::SurrogateKey;
pub use options::{PatientKeyMode, TransformOptions};
pub use records::{AppointmentRecord, PatientRecord};
