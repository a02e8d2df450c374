//! Dimension and fact rows of the star schema.

use chrono::{Datelike, NaiveDate};

use crate::ids::SurrogateKey;
use crate::records::PatientRecord;

/// A distinct patient attribute tuple with its surrogate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDimensionRow {
    pub patient: PatientRecord,
    pub surrogate_key: SurrogateKey,
}

/// A calendar date with its derived attributes.
///
/// `day_of_week` counts from Monday = 0 to Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDimensionRow {
    pub date: NaiveDate,
    pub surrogate_key: SurrogateKey,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_week: u32,
}

impl DateDimensionRow {
    pub fn new(date: NaiveDate, surrogate_key: SurrogateKey) -> Self {
        Self {
            date,
            surrogate_key,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: date.weekday().num_days_from_monday(),
        }
    }
}

/// One appointment resolved against the dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFactRow {
    pub id_cita: Option<String>,
    pub patient_surrogate_key: Option<SurrogateKey>,
    pub date_surrogate_key: Option<SurrogateKey>,
    pub especialidad: Option<String>,
    pub medico: Option<String>,
    pub costo: Option<String>,
    pub estado_cita: Option<String>,
}
