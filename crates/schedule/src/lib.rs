//! # datekit-schedule
//!
//! Repeating work/off-day schedules over inclusive date periods.
//!
//! A cycle of `work_days` consecutive work days followed by `off_days`
//! consecutive off days is anchored at the first day of a [`DatePeriod`] and
//! repeated until the period ends.
//!
//! ## Quick Start
//!
//! ```
//! use datekit_calendar::DatePeriod;
//! use datekit_schedule::{ScheduleConfig, work_schedule, work_schedule_dmy};
//!
//! // String in, string out.
//! let dates = work_schedule_dmy("01-01-2024", "10-01-2024", 1, 1).unwrap();
//! assert_eq!(dates[1], "03-01-2024");
//!
//! // Typed.
//! let period = DatePeriod::parse_dmy("01-01-2024", "15-01-2024").unwrap();
//! let config = ScheduleConfig::new(1, 3);
//! assert_eq!(work_schedule(&period, &config).unwrap().len(), 4);
//! ```
//!
//! [`DatePeriod`]: datekit_calendar::DatePeriod

mod config;
mod error;
mod generate;

pub use config::ScheduleConfig;
pub use error::ScheduleError;
pub use generate::{is_work_day, work_schedule, work_schedule_dmy};
