//! Dimensional transform for the clinic appointments star schema.
//!
//! - **source**: typed patient/appointment records from loaded frames
//! - **datetime**: the date parser shared by the date dimension and the fact table
//! - **patient**: patient dimension with dense surrogate keys
//! - **date**: calendar date dimension over appointment and birth dates
//! - **fact**: appointment fact table resolved by left lookup joins
//! - **frame**: conversion of the derived tables back into DataFrames
//! - **star**: the three builders wired together

pub mod date;
pub mod datetime;
pub mod error;
pub mod fact;
pub mod frame;
pub mod patient;
pub mod source;
pub mod star;

pub use date::{DateDimension, build_date_dimension};
pub use datetime::DateParser;
pub use error::{Result, TransformError};
pub use fact::{FactTable, JoinStats, build_appointment_facts};
pub use frame::{date_dimension_frame, fact_table_frame, patient_dimension_frame};
pub use patient::{PatientDimension, PatientLookup, build_patient_dimension};
pub use source::{appointments_from_frame, patients_from_frame};
pub use star::{StarSchema, build_star_schema};
