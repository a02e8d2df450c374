//! Appointment fact table.
//!
//! Each appointment is enriched with patient and date surrogate keys by left
//! lookup joins. The number of fact rows always equals the number of
//! appointments; a missing match leaves the key null.

use tracing::{info, warn};

use dwh_model::{AppointmentFactRow, AppointmentRecord};

use crate::date::DateDimension;
use crate::datetime::DateParser;
use crate::patient::PatientDimension;

/// Match counts from resolving the fact table against the dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    /// Appointments whose patient identifier matched no dimension member.
    pub unmatched_patients: usize,
    /// Appointments whose date was missing, unparseable or not a member.
    pub unmatched_dates: usize,
    /// Identifiers resolved by the lowest-key tie-break.
    pub ambiguous_patient_ids: usize,
}

/// Fact rows in appointment source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTable {
    rows: Vec<AppointmentFactRow>,
    stats: JoinStats,
}

impl FactTable {
    pub fn rows(&self) -> &[AppointmentFactRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn stats(&self) -> JoinStats {
        self.stats
    }
}

/// Resolves every appointment against the patient and date dimensions.
///
/// `parser` must be the parser the date dimension was built with.
pub fn build_appointment_facts(
    appointments: &[AppointmentRecord],
    patients: &PatientDimension,
    dates: &DateDimension,
    parser: &DateParser,
) -> FactTable {
    let lookup = patients.lookup();
    let mut stats = JoinStats {
        ambiguous_patient_ids: lookup.ambiguous_ids(),
        ..JoinStats::default()
    };

    let rows: Vec<AppointmentFactRow> = appointments
        .iter()
        .map(|appointment| {
            let patient_surrogate_key = appointment
                .patient_id()
                .and_then(|id| lookup.key_for(id));
            let date_surrogate_key = appointment
                .fecha_cita
                .as_deref()
                .and_then(|raw| parser.parse(raw))
                .and_then(|date| dates.key_for(date));

            if patient_surrogate_key.is_none() {
                stats.unmatched_patients += 1;
            }
            if date_surrogate_key.is_none() {
                stats.unmatched_dates += 1;
            }

            AppointmentFactRow {
                id_cita: appointment.id_cita.clone(),
                patient_surrogate_key,
                date_surrogate_key,
                especialidad: appointment.especialidad.clone(),
                medico: appointment.medico.clone(),
                costo: appointment.costo.clone(),
                estado_cita: appointment.estado_cita.clone(),
            }
        })
        .collect();

    if stats.unmatched_patients > 0 {
        warn!(
            appointments = stats.unmatched_patients,
            "appointments without a matching patient"
        );
    }
    info!(
        records = rows.len(),
        unmatched_patients = stats.unmatched_patients,
        unmatched_dates = stats.unmatched_dates,
        "appointment fact table built"
    );
    FactTable { rows, stats }
}
