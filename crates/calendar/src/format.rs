//! Exact-string rendering of times and date-times.

use chrono::{Datelike, Timelike};

use crate::error::CalendarError;
use crate::parse::parse_instant;

/// Clock used when rendering a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockFormat {
    /// `h:mm:ss AM`/`PM`, with 12 standing for noon and midnight.
    #[default]
    Hour12,
    /// `HH:MM:SS`, zero-padded.
    Hour24,
}

/// Renders the time of day as `h:mm:ss AM`/`PM`.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use datekit_calendar::format_time;
///
/// let t = NaiveTime::from_hms_opt(0, 5, 9).unwrap();
/// assert_eq!(format_time(&t), "12:05:09 AM");
/// ```
pub fn format_time(time: &impl Timelike) -> String {
    format_time_with(time, ClockFormat::Hour12)
}

/// Renders the time of day on the given clock.
pub fn format_time_with(time: &impl Timelike, clock: ClockFormat) -> String {
    match clock {
        ClockFormat::Hour12 => {
            let (is_pm, hour) = time.hour12();
            let meridiem = if is_pm { "PM" } else { "AM" };
            format!(
                "{hour}:{:02}:{:02} {meridiem}",
                time.minute(),
                time.second()
            )
        }
        ClockFormat::Hour24 => format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ),
    }
}

/// Renders a date-time string as `M/D/YYYY, h:mm:ss AM`/`PM` in UTC.
///
/// Month, day and hour are not zero-padded; minutes and seconds are.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string cannot be parsed.
///
/// # Example
///
/// ```
/// use datekit_calendar::format_date_time;
///
/// assert_eq!(
///     format_date_time("2024-02-01T15:00:00.000Z").unwrap(),
///     "2/1/2024, 3:00:00 PM"
/// );
/// ```
pub fn format_date_time(input: &str) -> Result<String, CalendarError> {
    let dt = parse_instant(input)?;
    Ok(format!(
        "{}/{}/{}, {}",
        dt.month(),
        dt.day(),
        dt.year(),
        format_time(&dt)
    ))
}
