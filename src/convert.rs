//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use datekit_calendar::ClockFormat;
use datekit_schedule::ScheduleConfig;

use crate::config::ScheduleToml;

/// Parses a clock name into the corresponding enum variant.
pub fn parse_clock(s: &str) -> Result<ClockFormat> {
    match s.to_lowercase().as_str() {
        "12h" | "12" => Ok(ClockFormat::Hour12),
        "24h" | "24" => Ok(ClockFormat::Hour24),
        other => bail!("unknown clock format: {other:?} (expected \"12h\" or \"24h\")"),
    }
}

/// Builds a [`ScheduleConfig`] from the TOML schedule section.
///
/// Command-line overrides take precedence over the file. The result is
/// validated so that zero-length blocks fail before any dates are generated.
pub fn build_schedule_config(
    schedule: &ScheduleToml,
    work: Option<u32>,
    off: Option<u32>,
) -> Result<ScheduleConfig> {
    let cfg = ScheduleConfig::new(
        work.unwrap_or(schedule.work_days),
        off.unwrap_or(schedule.off_days),
    );
    cfg.validate()?;
    Ok(cfg)
}
