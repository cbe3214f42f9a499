//! Month lengths, leap years, weekend counts and quarters.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4, except for century years,
/// which must also be divisible by 400.
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns `true` if the year of `date` is a Gregorian leap year.
pub fn is_leap_year(date: &impl Datelike) -> bool {
    is_leap(date.year())
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
///
/// # Example
///
/// ```
/// use datekit_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(2, 2023).unwrap(), 28);
/// ```
pub fn days_in_month(month: u32, year: i32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Counts the Saturdays and Sundays in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12, or
/// [`CalendarError::DateOutOfRange`] if the year cannot be represented.
pub fn weekends_in_month(month: u32, year: i32) -> Result<u32, CalendarError> {
    let n_days = days_in_month(month, year)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::DateOutOfRange)?;

    let count = first
        .iter_days()
        .take(n_days as usize)
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    Ok(count as u32)
}

/// Returns the quarter (1..=4) that `date` falls in.
pub fn quarter(date: &impl Datelike) -> u32 {
    date.month().div_ceil(3)
}
