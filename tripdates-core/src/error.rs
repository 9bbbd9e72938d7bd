//! Error types for trip date enumeration.

use chrono::NaiveDate;

/// Input validation failures. All of them abort the operation before any
/// candidate is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    /// The vacation end date is not strictly after its start date.
    #[error("end date {end} should be at least one day after the start date {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// The minimum duration is zero or exceeds the maximum.
    #[error(
        "minimum trip duration ({min_days}) should be positive and not bigger than the maximum ({max_days})"
    )]
    InvalidDurationRange { min_days: u32, max_days: u32 },

    /// A date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("'{input}' is not a valid YYYY-MM-DD date")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_window_message() {
        let e = TripError::InvalidWindow {
            start: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "end date 2024-06-01 should be at least one day after the start date 2024-06-30"
        );
    }

    #[test]
    fn invalid_duration_range_message() {
        let e = TripError::InvalidDurationRange {
            min_days: 10,
            max_days: 5,
        };
        assert_eq!(
            e.to_string(),
            "minimum trip duration (10) should be positive and not bigger than the maximum (5)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<TripError>();
    }
}
