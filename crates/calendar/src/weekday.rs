//! Weekday lookups, week numbering and Friday searches.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::parse::parse_instant;

/// Returns the English name of a weekday.
pub fn english_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the English weekday name of a date or date-time string.
///
/// The weekday is taken in UTC, so `2024-01-07T23:30:00-05:00` is a Monday.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string cannot be parsed.
pub fn weekday_name(input: &str) -> Result<&'static str, CalendarError> {
    parse_instant(input).map(|dt| english_name(dt.weekday()))
}

/// Advances `instant` to the first Friday strictly after its date.
///
/// The time of day is kept. A Friday maps to the Friday of the following week.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the result cannot be
/// represented.
pub fn next_friday(instant: NaiveDateTime) -> Result<NaiveDateTime, CalendarError> {
    let from_monday = instant.weekday().num_days_from_monday();
    let friday = Weekday::Fri.num_days_from_monday();
    let ahead = match (friday + 7 - from_monday) % 7 {
        0 => 7,
        n => n,
    };
    instant
        .checked_add_days(Days::new(u64::from(ahead)))
        .ok_or(CalendarError::DateOutOfRange)
}

/// Returns the week number of `date` within its year.
///
/// Weeks start on Monday and week 1 is the week containing January 1, so the
/// first week of a year may be partial. This is not the ISO 8601 week-year
/// numbering: January 1 is always in week 1.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use datekit_calendar::week_number;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 23).unwrap();
/// assert_eq!(week_number(&date), 8);
/// ```
pub fn week_number(date: &impl Datelike) -> u32 {
    // Weekday of January 1 counted from Monday: 0 for Monday, 6 for Sunday.
    let shift = (date.weekday().num_days_from_monday() + 7 - date.ordinal0() % 7) % 7;
    (date.ordinal0() + shift) / 7 + 1
}

/// Returns the first Friday the 13th on or after `date`.
///
/// Months are scanned forward from the month of `date`, rolling into later
/// years as needed. Every Gregorian year has at least one Friday the 13th,
/// so the scan ends within 14 months.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the search runs past the
/// representable range.
#[tracing::instrument(level = "debug", skip(date), fields(from = %date))]
pub fn next_friday_13th(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let mut candidate =
        NaiveDate::from_ymd_opt(date.year(), date.month(), 13).ok_or(CalendarError::DateOutOfRange)?;
    if candidate < date {
        candidate = next_month(candidate)?;
    }

    let mut months_scanned = 1u32;
    while candidate.weekday() != Weekday::Fri {
        trace!(%candidate, weekday = ?candidate.weekday(), "skipping");
        candidate = next_month(candidate)?;
        months_scanned += 1;
    }
    debug!(%candidate, months_scanned, "found Friday the 13th");
    Ok(candidate)
}

fn next_month(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.checked_add_months(Months::new(1))
        .ok_or(CalendarError::DateOutOfRange)
}
