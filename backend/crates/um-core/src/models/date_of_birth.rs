use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a date picker value to a `YYYY-MM-DD` calendar date.
///
/// Accepts a plain calendar date, an RFC 3339 timestamp (converted to UTC
/// first) or a timestamp without offset.
#[track_caller]
pub fn normalize_date_of_birth(raw: &str) -> CoreErrorResult<String> {
    let trimmed = raw.trim();

    let date = if let Ok(date) = NaiveDate::parse_from_str(trimmed, CALENDAR_DATE_FORMAT) {
        date
    } else if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        timestamp.with_timezone(&Utc).date_naive()
    } else if let Ok(timestamp) = trimmed.parse::<NaiveDateTime>() {
        timestamp.date()
    } else {
        return Err(CoreError::InvalidDateOfBirth {
            value: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    Ok(date.format(CALENDAR_DATE_FORMAT).to_string())
}
