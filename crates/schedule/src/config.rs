//! Configuration for the repeating work/off cycle.

use crate::error::ScheduleError;

/// Length of the work and off blocks of a repeating schedule cycle.
///
/// # Example
///
/// ```
/// use datekit_schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::new(2, 2).with_off_days(3);
/// assert_eq!(config.cycle_len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    work_days: u32,
    off_days: u32,
}

impl ScheduleConfig {
    /// Creates a cycle of `work_days` work days followed by `off_days` off days.
    pub fn new(work_days: u32, off_days: u32) -> Self {
        Self {
            work_days,
            off_days,
        }
    }

    /// Sets the number of consecutive work days per cycle.
    pub fn with_work_days(mut self, work_days: u32) -> Self {
        self.work_days = work_days;
        self
    }

    /// Sets the number of consecutive off days per cycle.
    pub fn with_off_days(mut self, off_days: u32) -> Self {
        self.off_days = off_days;
        self
    }

    /// Returns the number of consecutive work days per cycle.
    pub fn work_days(&self) -> u32 {
        self.work_days
    }

    /// Returns the number of consecutive off days per cycle.
    pub fn off_days(&self) -> u32 {
        self.off_days
    }

    /// Returns the full cycle length in days.
    pub fn cycle_len(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.off_days)
    }

    /// Validates this configuration.
    ///
    /// Both block lengths must be at least one day.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.work_days == 0 {
            return Err(ScheduleError::ZeroWorkDays);
        }
        if self.off_days == 0 {
            return Err(ScheduleError::ZeroOffDays);
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_accessors() {
        let config = ScheduleConfig::new(1, 1).with_work_days(4).with_off_days(3);
        assert_eq!(config.work_days(), 4);
        assert_eq!(config.off_days(), 3);
        assert_eq!(config.cycle_len(), 7);
    }

    #[test]
    fn default_is_two_on_two_off() {
        assert_eq!(ScheduleConfig::default(), ScheduleConfig::new(2, 2));
        assert!(ScheduleConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_work_days_rejected() {
        assert_eq!(
            ScheduleConfig::new(0, 3).validate().unwrap_err(),
            ScheduleError::ZeroWorkDays
        );
    }

    #[test]
    fn zero_off_days_rejected() {
        assert_eq!(
            ScheduleConfig::new(3, 0).validate().unwrap_err(),
            ScheduleError::ZeroOffDays
        );
    }

    #[test]
    fn zero_work_checked_first() {
        assert_eq!(
            ScheduleConfig::new(0, 0).validate().unwrap_err(),
            ScheduleError::ZeroWorkDays
        );
    }

    #[test]
    fn cycle_len_does_not_overflow() {
        assert_eq!(
            ScheduleConfig::new(u32::MAX, u32::MAX).cycle_len(),
            2 * u64::from(u32::MAX)
        );
    }
}
