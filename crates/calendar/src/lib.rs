//! # datekit-calendar
//!
//! Pure Gregorian date arithmetic, parsing and exact-string formatting.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"parse_instant()"| B["DateTime&lt;Utc&gt;"]
//!     B -->|"timestamp_millis()"| C["i64 ms"]
//!     B -->|"format_date_time()"| D["M/D/YYYY, h:mm:ss AM"]
//!     B -->|"weekday_name()"| E["English weekday"]
//!     F["NaiveDate"] -->|"next_friday_13th()"| F
//!     L["NaiveDateTime"] -->|"next_friday()"| L
//!     F -->|"week_number() / quarter() / is_leap_year()"| G["u32 / bool"]
//!     H["(month, year)"] -->|"days_in_month()"| I["u32"]
//!     H -->|"weekends_in_month()"| I
//!     J["&str, &str"] -->|"DatePeriod::parse_dmy()"| K["DatePeriod"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use datekit_calendar::{days_in_month, format_date_time, next_friday_13th, week_number};
//!
//! assert_eq!(days_in_month(2, 2024).unwrap(), 29);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! assert_eq!(week_number(&date), 5);
//!
//! let from = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
//! assert_eq!(
//!     next_friday_13th(from).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 10, 13).unwrap()
//! );
//!
//! assert_eq!(
//!     format_date_time("1999-01-05T02:20:00.000Z").unwrap(),
//!     "1/5/1999, 2:20:00 AM"
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parse` | Date-time and wall-clock parsing, epoch milliseconds, `DD-MM-YYYY` |
//! | `format` | Time-of-day and `M/D/YYYY` rendering |
//! | `month` | Month lengths, leap years, weekend counts, quarters |
//! | `weekday` | Weekday names, week numbers, Friday searches |
//! | `period` | Inclusive date periods |
//! | `error` | Error types |

mod error;
mod format;
mod month;
mod parse;
mod period;
mod weekday;

pub use error::CalendarError;
pub use format::{ClockFormat, format_date_time, format_time, format_time_with};
pub use month::{days_in_month, is_leap, is_leap_year, quarter, weekends_in_month};
pub use parse::{format_dmy, parse_dmy, parse_instant, parse_wall_clock, timestamp_millis};
pub use period::{DatePeriod, days_in_period, is_in_period};
pub use weekday::{english_name, next_friday, next_friday_13th, week_number, weekday_name};
