//! Schedule command: list the work days of a repeating cycle.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use datekit_calendar::{CalendarError, DatePeriod, format_dmy};
use datekit_schedule::work_schedule;

use crate::cli::ScheduleArgs;
use crate::config::DatekitConfig;
use crate::convert;

/// Run the schedule generator and print one `DD-MM-YYYY` date per line.
pub fn run(args: ScheduleArgs, config: &DatekitConfig) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    for line in render(&args, config)? {
        println!("{line}");
    }
    Ok(())
}

/// Computes the work days of the requested period as `DD-MM-YYYY` strings.
pub fn render(args: &ScheduleArgs, config: &DatekitConfig) -> Result<Vec<String>> {
    let schedule_cfg = convert::build_schedule_config(&config.schedule, args.work, args.off)?;
    let period = parse_period(&args.start, &args.end)
        .with_context(|| format!("invalid period {} .. {}", args.start, args.end))?;

    info!(
        %period,
        work_days = schedule_cfg.work_days(),
        off_days = schedule_cfg.off_days(),
        "generating schedule"
    );
    let dates = work_schedule(&period, &schedule_cfg).context("schedule generation failed")?;
    info!(n_work_days = dates.len(), n_days = period.len_days(), "schedule ready");

    Ok(dates.into_iter().map(format_dmy).collect())
}

/// Reads period bounds as `DD-MM-YYYY`, falling back to ISO 8601.
///
/// When neither form parses, the `DD-MM-YYYY` error is reported.
fn parse_period(start: &str, end: &str) -> Result<DatePeriod, CalendarError> {
    match DatePeriod::parse_dmy(start, end) {
        Err(dmy_err @ CalendarError::InvalidDate { .. }) => {
            DatePeriod::parse_iso(start, end).map_err(|iso_err| match iso_err {
                CalendarError::InvalidDate { .. } => dmy_err,
                other => other,
            })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: &str, end: &str, work: Option<u32>, off: Option<u32>) -> ScheduleArgs {
        ScheduleArgs {
            start: start.to_string(),
            end: end.to_string(),
            work,
            off,
        }
    }

    #[test]
    fn flags_override_defaults() {
        let lines = render(
            &args("01-01-2024", "15-01-2024", Some(1), Some(3)),
            &DatekitConfig::default(),
        )
        .unwrap();
        assert_eq!(lines, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
    }

    #[test]
    fn config_defaults_used() {
        // Default cycle is two on, two off.
        let lines = render(
            &args("01-01-2024", "08-01-2024", None, None),
            &DatekitConfig::default(),
        )
        .unwrap();
        assert_eq!(lines, ["01-01-2024", "02-01-2024", "05-01-2024", "06-01-2024"]);
    }

    #[test]
    fn iso_bounds_accepted() {
        let dmy = render(
            &args("01-01-2024", "15-01-2024", Some(1), Some(3)),
            &DatekitConfig::default(),
        )
        .unwrap();
        let iso = render(
            &args("2024-01-01", "2024-01-15T18:00:00Z", Some(1), Some(3)),
            &DatekitConfig::default(),
        )
        .unwrap();
        assert_eq!(dmy, iso);
    }

    #[test]
    fn iso_inverted_period_reported() {
        assert!(matches!(
            parse_period("2024-01-15", "2024-01-01"),
            Err(CalendarError::InvertedPeriod { .. })
        ));
    }

    #[test]
    fn unparsable_bound_reports_dmy_error() {
        assert_eq!(
            parse_period("01-01-2024", "someday").unwrap_err(),
            CalendarError::InvalidDate {
                input: "someday".to_string()
            }
        );
    }

    #[test]
    fn invalid_period_has_context() {
        let err = render(
            &args("15-01-2024", "01-01-2024", Some(1), Some(1)),
            &DatekitConfig::default(),
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid period 15-01-2024 .. 01-01-2024"));
        assert!(msg.contains("is before its start"));
    }

    #[test]
    fn zero_off_days_rejected() {
        let err = render(
            &args("01-01-2024", "15-01-2024", Some(1), Some(0)),
            &DatekitConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "off days per cycle must be at least 1");
    }
}
