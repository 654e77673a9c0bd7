//! Row conversion helpers shared by the query modules.

use std::str::FromStr;

use rusqlite::{types::Type, Row};
use serde::de::DeserializeOwned;

use crate::error::{RecruitError, Result};

/// Reads an optional text column and parses it with `FromStr`.
pub(crate) fn parse_optional<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.get::<_, Option<String>>(idx)?
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
        })
        .transpose()
}

/// Reads an optional JSON text column.
pub(crate) fn json_optional<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: DeserializeOwned,
{
    row.get::<_, Option<String>>(idx)?
        .map(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
        })
        .transpose()
}

/// Reads an optional non-negative integer column.
pub(crate) fn count_optional(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<u64>> {
    Ok(row
        .get::<_, Option<i64>>(idx)?
        .and_then(|n| u64::try_from(n).ok()))
}

/// Serializes an optional value into JSON text for storage.
pub(crate) fn to_json<T: serde::Serialize>(value: &Option<T>) -> Result<Option<String>> {
    value
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(Into::into)
}

/// Converts an id or count into SQLite's signed integer.
///
/// Values above `i64::MAX` are rejected instead of wrapping.
pub(crate) fn sql_id(field: &str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| {
        RecruitError::invalid_input(field)
            .with_reason(format!("{value} is too large to store (max {})", i64::MAX))
    })
}
