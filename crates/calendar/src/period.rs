//! Inclusive date periods and period arithmetic on date-time strings.

use std::fmt;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::parse::{parse_dmy, parse_instant};

/// A closed, inclusive interval of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl DatePeriod {
    /// Creates a period covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedPeriod`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvertedPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a period from two `DD-MM-YYYY` dates.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for an unparsable bound and
    /// [`CalendarError::InvertedPeriod`] if the end precedes the start.
    pub fn parse_dmy(start: &str, end: &str) -> Result<Self, CalendarError> {
        Self::new(parse_dmy(start)?, parse_dmy(end)?)
    }

    /// Parses a period from two ISO 8601 date or date-time strings.
    ///
    /// Only the UTC calendar date of each bound is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for an unparsable bound and
    /// [`CalendarError::InvertedPeriod`] if the end precedes the start.
    pub fn parse_iso(start: &str, end: &str) -> Result<Self, CalendarError> {
        Self::new(
            parse_instant(start)?.date_naive(),
            parse_instant(end)?.date_naive(),
        )
    }

    /// Returns the first day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of whole days from start to end, without counting the start.
    ///
    /// A single-day period has a span of 0.
    pub fn span_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs()
    }

    /// Number of days in the period, counting both endpoints.
    pub fn len_days(&self) -> u64 {
        self.span_days() + 1
    }

    /// Returns `true` if `date` lies within the period, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Counts the days between two date-time strings, both endpoints included.
///
/// The difference is taken in whole days (partial days are truncated) and
/// one is added, so identical inputs yield 1. A `start` after `end` yields a
/// non-positive count rather than an error.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if either string cannot be parsed.
pub fn days_in_period(start: &str, end: &str) -> Result<i64, CalendarError> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    Ok((end - start).num_days() + 1)
}

/// Returns `true` if the instant `date` lies within `start..=end`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if any string cannot be parsed.
pub fn is_in_period(date: &str, start: &str, end: &str) -> Result<bool, CalendarError> {
    let date = parse_instant(date)?;
    Ok(parse_instant(start)? <= date && date <= parse_instant(end)?)
}
