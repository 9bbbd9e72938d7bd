//! Input and output records for trip date enumeration.
//!
//! Field names follow the JSON shape exchanged with callers:
//! `{ vacation: { vacationStartDate, vacationEndDate }, desiredTripDuration: { minDays, maxDays } }`
//! in, and a list of `{ tripStartDate, tripEndDate, duration }` out.

use crate::dates::{days_between, parse_date};
use crate::enumerate::trip_dates_possibilities;
use crate::error::TripError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The inclusive span of dates a trip must fit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationWindow {
    #[serde(rename = "vacationStartDate")]
    pub start: NaiveDate,
    #[serde(rename = "vacationEndDate")]
    pub end: NaiveDate,
}

impl VacationWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a window from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TripError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Number of days from `start` to `end`. Not positive for an invalid window.
    pub fn span_days(&self) -> i64 {
        days_between(self.start, self.end)
    }
}

/// Inclusive bounds on the trip length, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationRange {
    pub min_days: u32,
    pub max_days: u32,
}

impl DurationRange {
    pub fn new(min_days: u32, max_days: u32) -> Self {
        Self { min_days, max_days }
    }

    pub fn contains(&self, days: u32) -> bool {
        (self.min_days..=self.max_days).contains(&days)
    }
}

/// One concrete trip: `trip_end_date` is always `trip_start_date + duration` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCandidate {
    pub trip_start_date: NaiveDate,
    pub trip_end_date: NaiveDate,
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub vacation: VacationWindow,
    pub desired_trip_duration: DurationRange,
}

impl TripRequest {
    pub fn new(vacation: VacationWindow, desired_trip_duration: DurationRange) -> Self {
        Self {
            vacation,
            desired_trip_duration,
        }
    }

    /// June 2024, trips of 5 to 10 days. Yields 135 possibilities.
    pub fn sample() -> Self {
        Self::new(
            VacationWindow::new(
                NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
                NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date"),
            ),
            DurationRange::new(5, 10),
        )
    }

    /// Validates the request and lists every trip that fits in it.
    pub fn possibilities(&self) -> Result<Vec<TripCandidate>, TripError> {
        trip_dates_possibilities(self)
    }
}
