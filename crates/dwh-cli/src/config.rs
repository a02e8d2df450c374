//! Run configuration.
//!
//! Built-in defaults are overridden by an optional TOML file, which is in
//! turn overridden by command-line flags. Every field of the file is
//! optional; unknown keys are rejected.
//!
//! ```toml
//! source_patient_path = "data/pacientes.csv"
//! source_appointment_path = "data/citas.csv"
//! output_dir = "warehouse"
//! patient_key_mode = "natural-key"
//! day_first = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dwh_model::{PatientKeyMode, TransformOptions};

pub const DEFAULT_PATIENT_PATH: &str = "./datasets_limpios/pacientes_limpio.csv";
pub const DEFAULT_APPOINTMENT_PATH: &str = "./datasets_limpios/citas_medicas_limpio.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "./datawarehouse_simulado/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything a run needs, passed explicitly into [`crate::pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub source_patient_path: PathBuf,
    pub source_appointment_path: PathBuf,
    pub output_dir: PathBuf,
    pub patient_key_mode: PatientKeyMode,
    pub day_first: bool,
    /// Build and report without writing any file.
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_patient_path: PathBuf::from(DEFAULT_PATIENT_PATH),
            source_appointment_path: PathBuf::from(DEFAULT_APPOINTMENT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            patient_key_mode: PatientKeyMode::default(),
            day_first: false,
            dry_run: false,
        }
    }
}

impl PipelineConfig {
    /// Reads a TOML config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::new()
            .with_patient_key_mode(self.patient_key_mode)
            .with_day_first(self.day_first)
    }
}
