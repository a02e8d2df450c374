//! Calendar date dimension shared by appointment dates and birth dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use dwh_common::redact_value;
use dwh_model::{AppointmentRecord, DateDimensionRow, PatientRecord, SurrogateKey};

use crate::datetime::DateParser;
use crate::error::{Result, TransformError};

/// Distinct calendar dates in ascending order, keyed 1..N by rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateDimension {
    rows: Vec<DateDimensionRow>,
}

impl DateDimension {
    /// Builds the dimension from any collection of dates (duplicates collapse).
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let sorted: BTreeSet<NaiveDate> = dates.into_iter().collect();
        let rows = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, date)| DateDimensionRow::new(date, SurrogateKey::from_position(idx)))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[DateDimensionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Surrogate key of `date`, if it is a member.
    pub fn key_for(&self, date: NaiveDate) -> Option<SurrogateKey> {
        self.rows
            .binary_search_by_key(&date, |row| row.date)
            .ok()
            .map(|idx| self.rows[idx].surrogate_key)
    }
}

/// Builds the date dimension from appointment dates and patient birth dates.
///
/// Raw values are unioned before parsing; values that do not parse are left
/// out. Fails only when there were raw values and none of them parsed.
pub fn build_date_dimension(
    appointments: &[AppointmentRecord],
    patients: &[PatientRecord],
    parser: &DateParser,
) -> Result<DateDimension> {
    let raw: BTreeSet<&str> = appointments
        .iter()
        .filter_map(|appointment| appointment.fecha_cita.as_deref())
        .chain(
            patients
                .iter()
                .filter_map(|patient| patient.fecha_nacimiento.as_deref()),
        )
        .collect();

    let mut dates = BTreeSet::new();
    let mut discarded = 0usize;
    for value in &raw {
        match parser.parse(value) {
            Some(date) => {
                dates.insert(date);
            }
            None => {
                discarded += 1;
                debug!(value = redact_value(value), "discarding unparseable date");
            }
        }
    }

    if !raw.is_empty() && dates.is_empty() {
        return Err(TransformError::NoParseableDates { values: raw.len() });
    }
    if discarded > 0 {
        warn!(discarded, "unparseable date values left out of the date dimension");
    }

    let dimension = DateDimension::from_dates(dates);
    info!(
        raw_values = raw.len(),
        records = dimension.len(),
        "date dimension built"
    );
    Ok(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(fecha: Option<&str>) -> AppointmentRecord {
        AppointmentRecord {
            fecha_cita: fecha.map(str::to_string),
            ..AppointmentRecord::default()
        }
    }

    fn patient(birth: Option<&str>) -> PatientRecord {
        PatientRecord {
            fecha_nacimiento: birth.map(str::to_string),
            ..PatientRecord::default()
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn unions_both_sources_sorted() {
        let appointments = vec![appointment(Some("2024-03-10")), appointment(Some("2024-01-05"))];
        let patients = vec![patient(Some("1990-01-01")), patient(Some("2024-03-10"))];

        let dimension = build_date_dimension(&appointments, &patients, &DateParser::new()).unwrap();

        let dates: Vec<NaiveDate> = dimension.rows().iter().map(|row| row.date).collect();
        assert_eq!(dates, vec![ymd(1990, 1, 1), ymd(2024, 1, 5), ymd(2024, 3, 10)]);
        let keys: Vec<u64> = dimension
            .rows()
            .iter()
            .map(|row| row.surrogate_key.get())
            .collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn differently_written_dates_collapse() {
        let appointments = vec![
            appointment(Some("2024-03-10")),
            appointment(Some("2024-03-10 09:15:00")),
            appointment(Some("20240310")),
        ];

        let dimension = build_date_dimension(&appointments, &[], &DateParser::new()).unwrap();

        assert_eq!(dimension.len(), 1);
        assert_eq!(dimension.rows()[0].date, ymd(2024, 3, 10));
    }

    #[test]
    fn unparseable_and_null_values_are_dropped() {
        let appointments = vec![
            appointment(Some("not-a-date")),
            appointment(None),
            appointment(Some("2024-03-10")),
        ];
        let patients = vec![patient(None)];

        let dimension = build_date_dimension(&appointments, &patients, &DateParser::new()).unwrap();

        assert_eq!(dimension.len(), 1);
    }

    #[test]
    fn empty_sources_give_empty_dimension() {
        let dimension = build_date_dimension(&[], &[patient(None)], &DateParser::new()).unwrap();
        assert!(dimension.is_empty());
    }

    #[test]
    fn all_unparseable_is_an_error() {
        let appointments = vec![appointment(Some("not-a-date")), appointment(Some("pending"))];

        let err = build_date_dimension(&appointments, &[], &DateParser::new()).unwrap_err();

        assert!(matches!(err, TransformError::NoParseableDates { values: 2 }));
    }

    #[test]
    fn key_for_finds_members_only() {
        let dimension = DateDimension::from_dates([ymd(2024, 3, 10), ymd(1990, 1, 1)]);

        assert_eq!(dimension.key_for(ymd(1990, 1, 1)).map(SurrogateKey::get), Some(1));
        assert_eq!(dimension.key_for(ymd(2024, 3, 10)).map(SurrogateKey::get), Some(2));
        assert_eq!(dimension.key_for(ymd(2000, 6, 1)), None);
    }
}
