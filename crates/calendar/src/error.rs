//! Error types for the datekit-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the datekit-calendar crate.
///
/// Unparsable input is reported as [`CalendarError::InvalidDate`] rather than
/// a not-a-date sentinel value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string cannot be parsed as a date or date-time.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// The input string that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a period ends before it starts.
    #[error("period end {end} is before its start {start}")]
    InvertedPeriod {
        /// First day of the rejected period.
        start: NaiveDate,
        /// Last day of the rejected period.
        end: NaiveDate,
    },

    /// Returned when date arithmetic leaves the representable range.
    #[error("date out of representable range")]
    DateOutOfRange,
}

impl CalendarError {
    pub(crate) fn invalid_date(input: &str) -> Self {
        Self::InvalidDate {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::invalid_date("not a date");
        assert_eq!(err.to_string(), "invalid date: \"not a date\"");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_inverted_period() {
        let err = CalendarError::InvertedPeriod {
            start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "period end 2024-01-01 is before its start 2024-01-10"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
