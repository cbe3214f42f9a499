//! Error types for the datekit-schedule crate.

use datekit_calendar::CalendarError;

/// Errors that can occur while generating a work schedule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// A cycle needs at least one work day.
    #[error("work days per cycle must be at least 1")]
    ZeroWorkDays,

    /// A cycle needs at least one off day.
    #[error("off days per cycle must be at least 1")]
    ZeroOffDays,

    /// Parsing or building the period failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ScheduleError::ZeroWorkDays.to_string(),
            "work days per cycle must be at least 1"
        );
        assert_eq!(
            ScheduleError::ZeroOffDays.to_string(),
            "off days per cycle must be at least 1"
        );
    }

    #[test]
    fn calendar_error_is_transparent() {
        let inner = CalendarError::InvalidMonth { month: 13 };
        let err = ScheduleError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ScheduleError>();
    }
}
