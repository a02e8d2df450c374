//! CLI library components for the clinic warehouse builder.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
