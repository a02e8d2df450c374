//! Shared utilities for the clinic warehouse crates.
//!
//! Polars value helpers used when turning loaded frames into records, and
//! the process-wide switch that decides whether row values may be logged.

pub mod values;
pub mod redact;

pub use values::{any_to_optional_string, column_strings};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
