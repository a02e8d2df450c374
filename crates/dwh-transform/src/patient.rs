//! Patient dimension.
//!
//! Members are deduplicated with a stable first-seen policy and numbered
//! 1..N in that order. See [`PatientKeyMode`] for what counts as a duplicate.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use dwh_common::redact_value;
use dwh_model::{PatientDimensionRow, PatientKeyMode, PatientRecord, SurrogateKey};

/// Deduplicated patients with their surrogate keys, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDimension {
    rows: Vec<PatientDimensionRow>,
}

impl PatientDimension {
    pub fn rows(&self) -> &[PatientDimensionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index from natural patient identifier to surrogate key.
    ///
    /// When an identifier has several members the lowest key wins.
    pub fn lookup(&self) -> PatientLookup<'_> {
        let mut keys = HashMap::with_capacity(self.rows.len());
        let mut ambiguous = HashSet::new();
        for row in &self.rows {
            let Some(id) = row.patient.patient_id() else {
                continue;
            };
            match keys.entry(id) {
                Entry::Vacant(entry) => {
                    entry.insert(row.surrogate_key);
                }
                Entry::Occupied(_) => {
                    ambiguous.insert(id);
                }
            }
        }
        if !ambiguous.is_empty() {
            warn!(
                identifiers = ambiguous.len(),
                "patient identifiers with several dimension members, lowest key used"
            );
        }
        PatientLookup {
            keys,
            ambiguous: ambiguous.len(),
        }
    }
}

/// Natural key to surrogate key index over a [`PatientDimension`].
#[derive(Debug, Clone)]
pub struct PatientLookup<'a> {
    keys: HashMap<&'a str, SurrogateKey>,
    ambiguous: usize,
}

impl PatientLookup<'_> {
    /// Surrogate key for the trimmed identifier `id`.
    pub fn key_for(&self, id: &str) -> Option<SurrogateKey> {
        self.keys.get(id.trim()).copied()
    }

    /// Number of identifiers that map to more than one member.
    pub fn ambiguous_ids(&self) -> usize {
        self.ambiguous
    }
}

/// Builds the patient dimension from source records.
///
/// Order is first occurrence in `patients`; keys are 1-based positions.
pub fn build_patient_dimension(patients: &[PatientRecord], mode: PatientKeyMode) -> PatientDimension {
    let mut seen_tuples: HashSet<&PatientRecord> = HashSet::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut members: Vec<&PatientRecord> = Vec::new();

    for patient in patients {
        let is_new = match (mode, patient.patient_id()) {
            (PatientKeyMode::NaturalKey, Some(id)) => {
                let inserted = seen_ids.insert(id);
                if !inserted && !seen_tuples.contains(patient) {
                    debug!(
                        id_paciente = redact_value(id),
                        "conflicting attributes for patient, keeping first occurrence"
                    );
                }
                seen_tuples.insert(patient);
                inserted
            }
            _ => seen_tuples.insert(patient),
        };
        if is_new {
            members.push(patient);
        }
    }

    let rows: Vec<PatientDimensionRow> = members
        .into_iter()
        .enumerate()
        .map(|(idx, patient)| PatientDimensionRow {
            patient: patient.clone(),
            surrogate_key: SurrogateKey::from_position(idx),
        })
        .collect();

    info!(
        records = patients.len(),
        members = rows.len(),
        mode = ?mode,
        "patient dimension built"
    );
    PatientDimension { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: Option<&str>, nombre: Option<&str>) -> PatientRecord {
        PatientRecord {
            id_paciente: id.map(str::to_string),
            nombre: nombre.map(str::to_string),
            sexo: Some("F".to_string()),
            fecha_nacimiento: Some("1990-01-01".to_string()),
            ..PatientRecord::default()
        }
    }

    fn keys(dimension: &PatientDimension) -> Vec<u64> {
        dimension
            .rows()
            .iter()
            .map(|row| row.surrogate_key.get())
            .collect()
    }

    #[test]
    fn empty_source_gives_empty_dimension() {
        let dimension = build_patient_dimension(&[], PatientKeyMode::Tuple);
        assert!(dimension.is_empty());
    }

    #[test]
    fn exact_duplicates_collapse_in_first_seen_order() {
        let patients = vec![
            patient(Some("2"), Some("Luis")),
            patient(Some("1"), Some("Ana")),
            patient(Some("2"), Some("Luis")),
        ];

        let dimension = build_patient_dimension(&patients, PatientKeyMode::Tuple);

        assert_eq!(dimension.len(), 2);
        assert_eq!(keys(&dimension), vec![1, 2]);
        assert_eq!(dimension.rows()[0].patient.nombre.as_deref(), Some("Luis"));
        assert_eq!(dimension.rows()[1].patient.nombre.as_deref(), Some("Ana"));
    }

    #[test]
    fn null_and_value_are_distinct_tuples() {
        let patients = vec![patient(Some("1"), Some("Ana")), patient(Some("1"), None)];

        let dimension = build_patient_dimension(&patients, PatientKeyMode::Tuple);

        assert_eq!(dimension.len(), 2);
        assert_eq!(keys(&dimension), vec![1, 2]);
    }

    #[test]
    fn natural_key_mode_keeps_first_occurrence() {
        let patients = vec![
            patient(Some("1"), Some("Ana")),
            patient(Some(" 1 "), Some("Ana Maria")),
            patient(Some("2"), Some("Luis")),
        ];

        let dimension = build_patient_dimension(&patients, PatientKeyMode::NaturalKey);

        assert_eq!(dimension.len(), 2);
        assert_eq!(dimension.rows()[0].patient.nombre.as_deref(), Some("Ana"));
        assert_eq!(dimension.rows()[1].surrogate_key.get(), 2);
    }

    #[test]
    fn natural_key_mode_dedupes_missing_ids_by_tuple() {
        let patients = vec![
            patient(None, Some("Sin id")),
            patient(None, Some("Sin id")),
            patient(None, Some("Otro")),
        ];

        let dimension = build_patient_dimension(&patients, PatientKeyMode::NaturalKey);

        assert_eq!(dimension.len(), 2);
    }

    #[test]
    fn lookup_prefers_lowest_key() {
        let patients = vec![
            patient(Some("1"), Some("Ana")),
            patient(Some("2"), Some("Luis")),
            patient(Some("1"), Some("Ana Maria")),
        ];
        let dimension = build_patient_dimension(&patients, PatientKeyMode::Tuple);

        let lookup = dimension.lookup();

        assert_eq!(lookup.key_for("1").map(SurrogateKey::get), Some(1));
        assert_eq!(lookup.key_for(" 2").map(SurrogateKey::get), Some(2));
        assert_eq!(lookup.key_for("999"), None);
        assert_eq!(lookup.ambiguous_ids(), 1);
    }
}
