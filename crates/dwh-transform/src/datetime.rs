//! Calendar date parsing for source date columns.
//!
//! The same [`DateParser`] must be used for the date dimension and for the
//! fact table, otherwise an appointment date could parse to a day that has no
//! dimension member.
//!
//! Accepted forms (after trimming):
//!
//! - `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD` and compact `YYYYMMDD`
//! - ISO date-times with `T` or a space, optional seconds and fraction
//! - RFC 3339 timestamps (the date in the timestamp's own offset is kept)
//! - `NN/NN/YYYY` (also with `-` or `.`), month first unless day first is set;
//!   when the preferred order is not a valid date the other order is tried
//!
//! Partial dates (`2024-03`, `2024`) are rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses raw source text into calendar dates, discarding any time of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParser {
    day_first: bool,
}

impl DateParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read ambiguous `NN/NN/YYYY` values as day/month/year.
    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.day_first = day_first;
        self
    }

    /// Returns the calendar date of `raw`, or `None` if it is not a date.
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        if starts_with_year(value) {
            if let Some(date) = DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            {
                return Some(date);
            }
            if let Some(datetime) = DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            {
                return Some(datetime.date());
            }
            if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
                return Some(timestamp.date_naive());
            }
        }

        parse_compact(value).or_else(|| self.parse_numeric(value))
    }

    fn parse_numeric(&self, value: &str) -> Option<NaiveDate> {
        let mut parts = value.split(['/', '-', '.']);
        let first = parse_component(parts.next()?, 2)?;
        let second = parse_component(parts.next()?, 2)?;
        let year_part = parts.next()?;
        if parts.next().is_some() || year_part.len() != 4 {
            return None;
        }
        let year = i32::try_from(parse_component(year_part, 4)?).ok()?;

        let (month, day) = if self.day_first {
            (second, first)
        } else {
            (first, second)
        };
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, day, month))
    }
}

/// `%Y` alone would accept a two-digit year such as the `10` in `10-03-24`.
fn starts_with_year(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && !bytes[4].is_ascii_digit()
}

fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_component(part: &str, max_len: usize) -> Option<u32> {
    if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
