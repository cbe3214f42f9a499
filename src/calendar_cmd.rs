//! Calendar commands: one lookup, one line of output.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use datekit_calendar::{
    days_in_month, days_in_period, format_date_time, format_time_with, is_in_period,
    is_leap_year, next_friday, next_friday_13th, parse_instant, parse_wall_clock, quarter,
    timestamp_millis, week_number, weekday_name, weekends_in_month,
};

use crate::cli::CalendarCommand;
use crate::config::DatekitConfig;
use crate::convert;

/// Run a calendar lookup and print its result.
pub fn run(command: CalendarCommand, config: &DatekitConfig) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let output = render(command, config)?;
    println!("{output}");
    Ok(())
}

/// Computes the printed result of a calendar command.
pub fn render(command: CalendarCommand, config: &DatekitConfig) -> Result<String> {
    debug!(?command, "evaluating");
    let output = match command {
        CalendarCommand::Timestamp { date } => timestamp_millis(&date)
            .with_context(|| format!("cannot convert {date:?} to a timestamp"))?
            .to_string(),
        CalendarCommand::Time { date, clock } => {
            let clock = convert::parse_clock(clock.as_deref().unwrap_or(&config.format.clock))?;
            let instant = parse_instant(&date)?;
            format_time_with(&instant, clock)
        }
        CalendarCommand::Weekday { date } => weekday_name(&date)?.to_string(),
        CalendarCommand::NextFriday { date } => next_friday(parse_wall_clock(&date)?)?
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
        CalendarCommand::DaysInMonth { month, year } => days_in_month(month, year)?.to_string(),
        CalendarCommand::PeriodDays { start, end } => days_in_period(&start, &end)?.to_string(),
        CalendarCommand::InPeriod { date, start, end } => {
            is_in_period(&date, &start, &end)?.to_string()
        }
        CalendarCommand::Format { date } => format_date_time(&date)?,
        CalendarCommand::Weekends { month, year } => {
            weekends_in_month(month, year)?.to_string()
        }
        CalendarCommand::Week { date } => week_number(&date).to_string(),
        CalendarCommand::Friday13 { date } => next_friday_13th(date)?.to_string(),
        CalendarCommand::Quarter { date } => quarter(&date).to_string(),
        CalendarCommand::Leap { date } => is_leap_year(&date).to_string(),
    };
    Ok(output)
}
