use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::ops::RangeInclusive;
use sea_orm::DbErr;
use std::str::FromStr;

use crate::{model::user::UnknownVariant, server::error::AppError};

/// Parses an enum stored as text back into its typed form.
///
/// Used at the repository boundary when converting entities to domain models.
///
/// # Arguments
/// - `value` - The stored column value
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(DbErr::Custom)` - The column holds a value no variant matches
pub fn parse_stored<T>(value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = UnknownVariant>,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse stored value: {}", e)))
}

/// Calendar years accepted in client supplied dates.
const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=9999;

/// Parses a client supplied date.
///
/// Accepts RFC 3339 timestamps (`2026-03-01T10:00:00Z`) and plain calendar
/// dates (`2026-03-01`), the latter taken as midnight UTC. Years outside
/// `SUPPORTED_YEARS` are rejected.
///
/// # Arguments
/// - `value` - Date as sent by the client
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed date
/// - `Err(AppError::BadRequest)` - Neither format matched
pub fn parse_date(value: &str, field: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|datetime| datetime.and_utc())
        })
        .filter(|datetime| SUPPORTED_YEARS.contains(&datetime.year()))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))
}

/// Trims an optional string, treating blank values as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
