//! Polars AnyValue utility functions.
//!
//! Source files are loaded with every column as text, so only string and
//! null values need a dedicated rendering.

use polars::prelude::{AnyValue, DataFrame};

/// Converts a Polars `AnyValue` to an optional string, keeping `Null`
/// distinct from an empty string.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use dwh_common::any_to_optional_string;
///
/// assert_eq!(any_to_optional_string(AnyValue::Null), None);
/// assert_eq!(any_to_optional_string(AnyValue::String("Ana")), Some("Ana".to_string()));
/// ```
pub fn any_to_optional_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        other => Some(other.to_string()),
    }
}

/// All values of a column as nullable strings, or `None` if the column is absent.
pub fn column_strings(df: &DataFrame, name: &str) -> Option<Vec<Option<String>>> {
    let column = df.column(name).ok()?;
    let values = (0..df.height())
        .map(|idx| any_to_optional_string(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();
    Some(values)
}
