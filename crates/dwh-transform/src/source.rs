//! Typed source records from loaded DataFrames.
//!
//! Column names are matched after trimming, so a header such as
//! `" nombre"` still resolves. A missing column is a [`TransformError`].

use polars::prelude::DataFrame;

use dwh_common::column_strings;
use dwh_model::schema::{APPOINTMENT_COLUMNS, APPOINTMENTS_SOURCE, PATIENT_COLUMNS, PATIENTS_SOURCE};
use dwh_model::{AppointmentRecord, PatientRecord};

use crate::error::{Result, TransformError};

struct SourceColumns {
    values: Vec<Vec<Option<String>>>,
}

impl SourceColumns {
    fn read(df: &DataFrame, table: &str, names: &[&str]) -> Result<Self> {
        let values = names
            .iter()
            .map(|name| {
                resolve_column(df, name)
                    .and_then(|actual| column_strings(df, &actual))
                    .ok_or_else(|| TransformError::MissingColumn {
                        table: table.to_string(),
                        column: (*name).to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    fn take(&mut self, column: usize, row: usize) -> Option<String> {
        self.values[column][row].take()
    }
}

fn resolve_column(df: &DataFrame, name: &str) -> Option<String> {
    df.get_column_names()
        .into_iter()
        .find(|column| column.trim() == name)
        .map(ToString::to_string)
}

/// Patient records in source order.
pub fn patients_from_frame(df: &DataFrame) -> Result<Vec<PatientRecord>> {
    let mut columns = SourceColumns::read(df, PATIENTS_SOURCE, &PATIENT_COLUMNS)?;
    let records = (0..df.height())
        .map(|row| PatientRecord {
            id_paciente: columns.take(0, row),
            nombre: columns.take(1, row),
            sexo: columns.take(2, row),
            fecha_nacimiento: columns.take(3, row),
            edad: columns.take(4, row),
            ciudad: columns.take(5, row),
            email: columns.take(6, row),
            telefono: columns.take(7, row),
        })
        .collect();
    Ok(records)
}

/// Appointment records in source order.
pub fn appointments_from_frame(df: &DataFrame) -> Result<Vec<AppointmentRecord>> {
    let mut columns = SourceColumns::read(df, APPOINTMENTS_SOURCE, &APPOINTMENT_COLUMNS)?;
    let records = (0..df.height())
        .map(|row| AppointmentRecord {
            id_cita: columns.take(0, row),
            id_paciente: columns.take(1, row),
            fecha_cita: columns.take(2, row),
            especialidad: columns.take(3, row),
            medico: columns.take(4, row),
            costo: columns.take(5, row),
            estado_cita: columns.take(6, row),
        })
        .collect();
    Ok(records)
}
