//! The full transform: source frames in, star schema out.

use polars::prelude::DataFrame;
use tracing::info_span;

use dwh_model::TransformOptions;

use crate::date::{DateDimension, build_date_dimension};
use crate::datetime::DateParser;
use crate::error::Result;
use crate::fact::{FactTable, build_appointment_facts};
use crate::patient::{PatientDimension, build_patient_dimension};
use crate::source::{appointments_from_frame, patients_from_frame};

/// Patient and date dimensions plus the appointment fact table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarSchema {
    pub patients: PatientDimension,
    pub dates: DateDimension,
    pub facts: FactTable,
}

/// Builds the star schema from the loaded patients and appointments.
///
/// Both dimensions are complete before the fact table is resolved against
/// them. The source frames are not modified.
pub fn build_star_schema(
    patients: &DataFrame,
    appointments: &DataFrame,
    options: &TransformOptions,
) -> Result<StarSchema> {
    let patient_records = patients_from_frame(patients)?;
    let appointment_records = appointments_from_frame(appointments)?;
    let parser = DateParser::new().with_day_first(options.day_first);

    let patient_dimension = {
        let _span = info_span!("dim_paciente").entered();
        build_patient_dimension(&patient_records, options.patient_key_mode)
    };
    let date_dimension = {
        let _span = info_span!("dim_fecha").entered();
        build_date_dimension(&appointment_records, &patient_records, &parser)?
    };
    let facts = {
        let _span = info_span!("hecho_citas").entered();
        build_appointment_facts(
            &appointment_records,
            &patient_dimension,
            &date_dimension,
            &parser,
        )
    };

    Ok(StarSchema {
        patients: patient_dimension,
        dates: date_dimension,
        facts,
    })
}
