//! Precondition checks run once before enumeration.

use crate::dates::days_between;
use crate::error::TripError;
use crate::trip::{DurationRange, VacationWindow};

/// Fails when the end date is not at least one day after the start date.
pub fn ensure_window_valid(window: &VacationWindow) -> Result<(), TripError> {
    if days_between(window.start, window.end) <= 0 {
        return Err(TripError::InvalidWindow {
            start: window.start,
            end: window.end,
        });
    }
    Ok(())
}

/// Fails when the minimum is zero or bigger than the maximum.
pub fn ensure_duration_range_valid(range: &DurationRange) -> Result<(), TripError> {
    if range.min_days == 0 || range.min_days > range.max_days {
        return Err(TripError::InvalidDurationRange {
            min_days: range.min_days,
            max_days: range.max_days,
        });
    }
    Ok(())
}
