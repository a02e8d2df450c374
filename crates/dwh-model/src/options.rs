//! Options controlling how the star schema is derived.

use serde::{Deserialize, Serialize};

/// How patient dimension members are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatientKeyMode {
    /// One member per distinct attribute tuple (nulls included).
    ///
    /// The same `id_paciente` may appear in several members when its
    /// attributes differ between source rows.
    #[default]
    Tuple,
    /// One member per trimmed `id_paciente`; the first occurrence wins.
    ///
    /// Rows without an identifier are still deduplicated by tuple.
    NaturalKey,
}

/// Options for the dimensional transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub patient_key_mode: PatientKeyMode,
    /// Read ambiguous `NN/NN/YYYY` dates as day/month instead of month/day.
    pub day_first: bool,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patient_key_mode(mut self, mode: PatientKeyMode) -> Self {
        self.patient_key_mode = mode;
        self
    }

    pub fn with_day_first(mut self, enable: bool) -> Self {
        self.day_first = enable;
        self
    }
}
