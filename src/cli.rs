use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Date arithmetic and work-schedule utilities.
#[derive(Parser)]
#[command(
    name = "datekit",
    version,
    about = "Date arithmetic and work-schedule utilities"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./datekit.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Calendar(CalendarCommand),
    /// List the work days of a repeating work/off cycle.
    Schedule(ScheduleArgs),
}

/// Single-value calendar lookups.
#[derive(Subcommand, Debug, PartialEq)]
pub enum CalendarCommand {
    /// Milliseconds since the Unix epoch.
    Timestamp {
        /// Date or date-time string.
        date: String,
    },
    /// Time of day of a date-time.
    Time {
        /// Date or date-time string.
        date: String,
        /// Clock to render on: "12h" or "24h" (overrides config).
        #[arg(long)]
        clock: Option<String>,
    },
    /// English weekday name, taken in UTC.
    Weekday {
        /// Date or date-time string.
        date: String,
    },
    /// First Friday after a date, keeping the time of day.
    NextFriday {
        /// Date or date-time without offset (YYYY-MM-DD[THH:MM[:SS]]).
        date: String,
    },
    /// Number of days in a month.
    DaysInMonth {
        /// Month (1-12).
        month: u32,
        /// Year.
        year: i32,
    },
    /// Days between two dates, both included.
    PeriodDays {
        /// Period start.
        start: String,
        /// Period end.
        end: String,
    },
    /// Whether a date lies within a period, bounds included.
    InPeriod {
        /// Date to test.
        date: String,
        /// Period start.
        start: String,
        /// Period end.
        end: String,
    },
    /// Render a date-time as M/D/YYYY, h:mm:ss AM/PM in UTC.
    Format {
        /// Date or date-time string.
        date: String,
    },
    /// Number of Saturdays and Sundays in a month.
    Weekends {
        /// Month (1-12).
        month: u32,
        /// Year.
        year: i32,
    },
    /// Week number of a date (weeks start Monday, week 1 holds January 1).
    Week {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,
    },
    /// First Friday the 13th on or after a date.
    #[command(name = "friday13")]
    Friday13 {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,
    },
    /// Quarter (1-4) of a date.
    Quarter {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,
    },
    /// Whether the year of a date is a leap year.
    Leap {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,
    },
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    /// First day of the period, DD-MM-YYYY or ISO 8601.
    pub start: String,

    /// Last day of the period, DD-MM-YYYY or ISO 8601.
    pub end: String,

    /// Consecutive work days per cycle (overrides config).
    #[arg(short, long)]
    pub work: Option<u32>,

    /// Consecutive off days per cycle (overrides config).
    #[arg(short, long)]
    pub off: Option<u32>,
}
