//! Derived tables as Polars DataFrames, in export column order.
//!
//! Source text is carried through unchanged and nulls stay null, so the
//! exported files reproduce the source values byte for byte.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use dwh_model::SurrogateKey;
use dwh_model::schema::{
    COSTO, DATE, DATE_SURROGATE_KEY, DAY, DAY_OF_WEEK, ESPECIALIDAD, ESTADO_CITA, ID_CITA, MEDICO,
    MONTH, PATIENT_COLUMNS, PATIENT_SURROGATE_KEY, SURROGATE_KEY, YEAR,
};

use crate::date::DateDimension;
use crate::error::Result;
use crate::fact::FactTable;
use crate::patient::PatientDimension;

/// Calendar dates are written as `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

fn text_column(name: &str, values: impl Iterator<Item = Option<String>>) -> Column {
    let values: Vec<Option<String>> = values.collect();
    Series::new(name.into(), values).into_column()
}

fn key_column(name: &str, keys: impl Iterator<Item = SurrogateKey>) -> Column {
    let values: Vec<u64> = keys.map(SurrogateKey::get).collect();
    Series::new(name.into(), values).into_column()
}

fn optional_key_column(name: &str, keys: impl Iterator<Item = Option<SurrogateKey>>) -> Column {
    let values: Vec<Option<u64>> = keys.map(|key| key.map(SurrogateKey::get)).collect();
    Series::new(name.into(), values).into_column()
}

/// `dim_paciente`: the eight patient columns followed by `surrogate_key`.
pub fn patient_dimension_frame(dimension: &PatientDimension) -> Result<DataFrame> {
    let rows = dimension.rows();
    let mut columns: Vec<Column> = PATIENT_COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            text_column(
                name,
                rows.iter()
                    .map(|row| row.patient.values()[idx].map(str::to_string)),
            )
        })
        .collect();
    columns.push(key_column(
        SURROGATE_KEY,
        rows.iter().map(|row| row.surrogate_key),
    ));
    Ok(DataFrame::new(columns)?)
}

/// `dim_fecha`: date, surrogate_key, year, month, day, day_of_week.
pub fn date_dimension_frame(dimension: &DateDimension) -> Result<DataFrame> {
    let rows = dimension.rows();
    let dates: Vec<String> = rows
        .iter()
        .map(|row| row.date.format(DATE_FORMAT).to_string())
        .collect();
    let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
    let months: Vec<u32> = rows.iter().map(|row| row.month).collect();
    let days: Vec<u32> = rows.iter().map(|row| row.day).collect();
    let weekdays: Vec<u32> = rows.iter().map(|row| row.day_of_week).collect();

    let columns = vec![
        Series::new(DATE.into(), dates).into_column(),
        key_column(SURROGATE_KEY, rows.iter().map(|row| row.surrogate_key)),
        Series::new(YEAR.into(), years).into_column(),
        Series::new(MONTH.into(), months).into_column(),
        Series::new(DAY.into(), days).into_column(),
        Series::new(DAY_OF_WEEK.into(), weekdays).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// `hecho_citas`: id_cita, both surrogate keys, then the appointment measures.
pub fn fact_table_frame(facts: &FactTable) -> Result<DataFrame> {
    let rows = facts.rows();
    let columns = vec![
        text_column(ID_CITA, rows.iter().map(|row| row.id_cita.clone())),
        optional_key_column(
            PATIENT_SURROGATE_KEY,
            rows.iter().map(|row| row.patient_surrogate_key),
        ),
        optional_key_column(
            DATE_SURROGATE_KEY,
            rows.iter().map(|row| row.date_surrogate_key),
        ),
        text_column(ESPECIALIDAD, rows.iter().map(|row| row.especialidad.clone())),
        text_column(MEDICO, rows.iter().map(|row| row.medico.clone())),
        text_column(COSTO, rows.iter().map(|row| row.costo.clone())),
        text_column(ESTADO_CITA, rows.iter().map(|row| row.estado_cita.clone())),
    ];
    Ok(DataFrame::new(columns)?)
}
