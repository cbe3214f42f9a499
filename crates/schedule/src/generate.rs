//! Work-day enumeration over an inclusive period.

use chrono::{Days, NaiveDate};
use datekit_calendar::{CalendarError, DatePeriod, format_dmy};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::error::ScheduleError;

/// Lists the work days of `period` under the cycle in `config`.
///
/// The cycle is anchored at the period start: the first
/// `config.work_days()` days are work days, the next `config.off_days()` are
/// off, and the pattern repeats until the period end. Dates come back in
/// ascending order and never fall outside the period.
///
/// # Errors
///
/// Returns [`ScheduleError::ZeroWorkDays`] or [`ScheduleError::ZeroOffDays`]
/// if the configuration is invalid.
///
/// # Example
///
/// ```
/// use datekit_calendar::DatePeriod;
/// use datekit_schedule::{ScheduleConfig, work_schedule};
///
/// let period = DatePeriod::parse_dmy("01-01-2024", "10-01-2024").unwrap();
/// let dates = work_schedule(&period, &ScheduleConfig::new(1, 1)).unwrap();
/// assert_eq!(dates.len(), 5);
/// ```
#[tracing::instrument(skip_all, fields(period = %period, work_days = config.work_days(), off_days = config.off_days()))]
pub fn work_schedule(
    period: &DatePeriod,
    config: &ScheduleConfig,
) -> Result<Vec<NaiveDate>, ScheduleError> {
    config.validate()?;

    let total = period.span_days();
    let work = u64::from(config.work_days());
    let off = u64::from(config.off_days());

    let mut dates = Vec::new();
    let mut offset = 0u64;
    while offset <= total {
        for _ in 0..work {
            if offset > total {
                break;
            }
            let date = period
                .start()
                .checked_add_days(Days::new(offset))
                .ok_or(CalendarError::DateOutOfRange)?;
            dates.push(date);
            offset += 1;
        }
        offset += off;
    }

    debug!(n_dates = dates.len(), span_days = total, "schedule generated");
    Ok(dates)
}

/// Lists the work days between two `DD-MM-YYYY` dates as `DD-MM-YYYY` strings.
///
/// # Errors
///
/// Returns [`ScheduleError::Calendar`] if a bound cannot be parsed or the end
/// precedes the start, and the errors of [`work_schedule`] otherwise.
///
/// # Example
///
/// ```
/// use datekit_schedule::work_schedule_dmy;
///
/// let dates = work_schedule_dmy("01-01-2024", "15-01-2024", 1, 3).unwrap();
/// assert_eq!(dates, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
/// ```
pub fn work_schedule_dmy(
    start: &str,
    end: &str,
    work_days: u32,
    off_days: u32,
) -> Result<Vec<String>, ScheduleError> {
    let period = DatePeriod::parse_dmy(start, end)?;
    let config = ScheduleConfig::new(work_days, off_days);
    let dates = work_schedule(&period, &config)?;
    Ok(dates.into_iter().map(format_dmy).collect())
}

/// Returns `true` if `date` is a work day of the cycle anchored at `start`.
///
/// Dates before `start` are never work days.
///
/// # Errors
///
/// Returns [`ScheduleError::ZeroWorkDays`] or [`ScheduleError::ZeroOffDays`]
/// if the configuration is invalid.
pub fn is_work_day(
    start: NaiveDate,
    config: &ScheduleConfig,
    date: NaiveDate,
) -> Result<bool, ScheduleError> {
    config.validate()?;
    if date < start {
        return Ok(false);
    }
    let position = (date - start).num_days().unsigned_abs() % config.cycle_len();
    Ok(position < u64::from(config.work_days()))
}
