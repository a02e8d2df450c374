//! CLI argument definitions for the warehouse builder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use dwh_model::PatientKeyMode;

#[derive(Parser)]
#[command(
    name = "clinic-dwh",
    version,
    about = "Build a star schema from the cleaned patient and appointment files",
    long_about = "Build a star schema from the cleaned patient and appointment files.\n\n\
                  Writes dim_paciente.csv, dim_fecha.csv and hecho_citas.csv into the\n\
                  output directory. Runs with built-in default paths when no option is given."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow source values (names, emails, dates) to appear in logs.
    #[arg(long = "log-data")]
    pub log_data: bool,

    /// TOML file with run settings; flags given here take precedence.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Patients CSV file.
    #[arg(long = "patients", value_name = "PATH")]
    pub patients: Option<PathBuf>,

    /// Appointments CSV file.
    #[arg(long = "appointments", value_name = "PATH")]
    pub appointments: Option<PathBuf>,

    /// Directory the warehouse tables are written to.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// How patient dimension members are told apart.
    #[arg(long = "patient-key-mode", value_enum)]
    pub patient_key_mode: Option<PatientKeyModeArg>,

    /// Read ambiguous NN/NN/YYYY dates as day/month/year.
    #[arg(long = "day-first")]
    pub day_first: bool,

    /// Build every table and report counts without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PatientKeyModeArg {
    /// One member per distinct attribute tuple.
    Tuple,
    /// One member per patient identifier, first row wins.
    NaturalKey,
}

impl From<PatientKeyModeArg> for PatientKeyMode {
    fn from(arg: PatientKeyModeArg) -> Self {
        match arg {
            PatientKeyModeArg::Tuple => Self::Tuple,
            PatientKeyModeArg::NaturalKey => Self::NaturalKey,
        }
    }
}
