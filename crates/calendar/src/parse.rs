//! Parsing of date and date-time strings.
//!
//! Strings without an explicit offset are read as UTC so that results never
//! depend on the host timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::CalendarError;

/// Offset-carrying layouts RFC 3339 rejects: missing seconds or a colon-less
/// offset (`2024-02-01T15:00Z`, `2024-02-01T15:00:00+0200`).
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Naive date-time layouts tried after the offset forms, in order.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DMY_FORMAT: &str = "%d-%m-%Y";

/// Parses a date or date-time string into an absolute instant.
///
/// Accepted forms, tried in order:
///
/// 1. RFC 3339 with an offset (`2024-02-01T15:00:00.000Z`, `...+02:00`),
///    also without seconds or with a colon-less offset (`2024-02-01T15:00Z`,
///    `2024-02-01T15:00:00+0200`)
/// 2. ISO 8601 without an offset (`2024-02-01T15:00:00`, `2024-02-01 15:00`),
///    read as UTC
/// 3. A bare ISO date (`2024-02-01`), read as UTC midnight
/// 4. RFC 2822 (`Thu, 1 Feb 2024 15:00:00 +0000`)
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if no form matches.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, CalendarError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    if let Some(naive) = parse_naive(s) {
        return Ok(naive.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    Err(CalendarError::invalid_date(input))
}

/// Parses an offset-free date or date-time as a wall-clock value.
///
/// Accepts the ISO 8601 forms without an offset (`2024-01-03T15:30:00`,
/// `2024-01-03 15:30`) and a bare date (`2024-01-03`, read as midnight).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if no form matches.
pub fn parse_wall_clock(input: &str) -> Result<NaiveDateTime, CalendarError> {
    parse_naive(input.trim()).ok_or_else(|| CalendarError::invalid_date(input))
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Converts a date or date-time string to milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string cannot be parsed.
///
/// # Example
///
/// ```
/// use datekit_calendar::timestamp_millis;
///
/// assert_eq!(timestamp_millis("1970-01-01T00:00:01.500Z").unwrap(), 1500);
/// ```
pub fn timestamp_millis(input: &str) -> Result<i64, CalendarError> {
    parse_instant(input).map(|dt| dt.timestamp_millis())
}

/// Parses a `DD-MM-YYYY` date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string is not a valid
/// `DD-MM-YYYY` calendar date.
pub fn parse_dmy(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), DMY_FORMAT)
        .map_err(|_| CalendarError::invalid_date(input))
}

/// Renders a date as zero-padded `DD-MM-YYYY`.
pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DMY_FORMAT).to_string()
}
