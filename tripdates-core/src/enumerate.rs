//! Enumeration of every trip that fits in a vacation window.
//!
//! Durations are walked in increasing order. For each duration the start date
//! slides one day at a time from the window start until the trip end would
//! fall after the window end; the next duration then starts over from the
//! window start.

use crate::dates::add_days;
use crate::error::TripError;
use crate::trip::{DurationRange, TripCandidate, TripRequest, VacationWindow};
use crate::validate::{ensure_duration_range_valid, ensure_window_valid};
use tracing::{debug, info};

/// Lazily yields every [`TripCandidate`] of `range` that fits in `window`.
///
/// Candidates come grouped by duration (ascending) and, within one duration,
/// by start date (ascending, one day apart). A duration longer than the window
/// contributes nothing. Inputs are not validated here; see
/// [`trip_dates_possibilities`].
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use tripdates_core::{enumerate, DurationRange, VacationWindow};
/// let window = VacationWindow::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
/// );
/// let trips: Vec<_> = enumerate(window, DurationRange::new(2, 3)).collect();
///
/// assert_eq!(trips.len(), 3);
/// assert_eq!(trips[0].trip_start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(trips[2].duration, 3);
/// assert_eq!(trips[2].trip_end_date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
/// ```
pub fn enumerate(
    window: VacationWindow,
    range: DurationRange,
) -> impl Iterator<Item = TripCandidate> {
    let span = window.span_days();
    (range.min_days..=range.max_days).flat_map(move |duration| {
        // Last start offset whose trip still ends on or before `window.end`.
        // Negative when the duration alone overflows the window.
        let last_offset = span - i64::from(duration);
        (0..=last_offset).map(move |offset| {
            let trip_start_date = add_days(window.start, offset);
            TripCandidate {
                trip_start_date,
                trip_end_date: add_days(trip_start_date, i64::from(duration)),
                duration,
            }
        })
    })
}

/// Number of candidates [`enumerate`] yields for the same inputs.
pub fn candidate_count(window: VacationWindow, range: DurationRange) -> usize {
    let span = window.span_days();
    let min = i64::from(range.min_days);
    let max = i64::from(range.max_days).min(span);
    if min > max {
        return 0;
    }
    // Duration `d` contributes `span - d + 1` starts: an arithmetic series.
    let terms = max - min + 1;
    let first = span - min + 1;
    let last = span - max + 1;
    usize::try_from(terms * (first + last) / 2).unwrap_or(0)
}

/// Validates `request` and collects every trip possibility in order.
///
/// The window is checked before the duration range; the first failure is
/// returned and nothing is enumerated.
pub fn trip_dates_possibilities(request: &TripRequest) -> Result<Vec<TripCandidate>, TripError> {
    let window = request.vacation;
    let range = request.desired_trip_duration;

    ensure_window_valid(&window)?;
    ensure_duration_range_valid(&range)?;

    debug!(
        start = %window.start,
        end = %window.end,
        min_days = range.min_days,
        max_days = range.max_days,
        "enumerating trip dates"
    );

    let mut candidates = Vec::with_capacity(candidate_count(window, range));
    candidates.extend(enumerate(window, range));

    info!(count = candidates.len(), "trip date possibilities found");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn june() -> VacationWindow {
        VacationWindow::new(d(2024, 6, 1), d(2024, 6, 30))
    }

    #[test]
    fn june_five_to_ten_days() {
        let trips: Vec<_> = enumerate(june(), DurationRange::new(5, 10)).collect();
        assert_eq!(trips.len(), 135);

        let five: Vec<_> = trips.iter().filter(|t| t.duration == 5).collect();
        assert_eq!(five.len(), 25);
        assert_eq!(five[0].trip_start_date, d(2024, 6, 1));
        assert_eq!(five[0].trip_end_date, d(2024, 6, 6));
        assert_eq!(five[24].trip_start_date, d(2024, 6, 25));
        assert_eq!(five[24].trip_end_date, d(2024, 6, 30));

        let ten: Vec<_> = trips.iter().filter(|t| t.duration == 10).collect();
        assert_eq!(ten.len(), 20);
        assert_eq!(ten.last().unwrap().trip_start_date, d(2024, 6, 20));
        assert_eq!(ten.last().unwrap().trip_end_date, d(2024, 6, 30));
    }

    #[test]
    fn first_candidate_of_each_duration_restarts_at_window_start() {
        let trips: Vec<_> = enumerate(june(), DurationRange::new(5, 10)).collect();
        for pair in trips.windows(2) {
            if pair[0].duration != pair[1].duration {
                assert_eq!(pair[1].duration, pair[0].duration + 1);
                assert_eq!(pair[1].trip_start_date, june().start);
            }
        }
    }

    #[test]
    fn full_span_duration_yields_single_candidate() {
        let trips: Vec<_> = enumerate(june(), DurationRange::new(29, 29)).collect();
        assert_eq!(
            trips,
            vec![TripCandidate {
                trip_start_date: d(2024, 6, 1),
                trip_end_date: d(2024, 6, 30),
                duration: 29,
            }]
        );
    }

    #[test]
    fn durations_longer_than_window_are_skipped() {
        let trips: Vec<_> = enumerate(june(), DurationRange::new(28, 40)).collect();
        assert_eq!(trips.len(), 3);
        assert!(trips.iter().all(|t| t.duration <= 29));
        assert!(enumerate(june(), DurationRange::new(30, 40)).next().is_none());
    }

    #[test]
    fn candidate_count_matches_enumeration() {
        let ranges = [(1, 1), (1, 29), (5, 10), (10, 5), (28, 40), (30, 35)];
        for (min, max) in ranges {
            let range = DurationRange::new(min, max);
            assert_eq!(
                candidate_count(june(), range),
                enumerate(june(), range).count(),
                "range {min}..={max}"
            );
        }
    }

    #[test]
    fn candidate_count_survives_huge_maximum() {
        let range = DurationRange::new(1, u32::MAX);
        assert_eq!(candidate_count(june(), range), 29 * 30 / 2);
    }

    #[test]
    fn possibilities_validate_window_first() {
        let request = TripRequest::new(
            VacationWindow::new(d(2024, 6, 30), d(2024, 6, 1)),
            DurationRange::new(10, 5),
        );
        assert!(matches!(
            trip_dates_possibilities(&request),
            Err(TripError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn possibilities_reject_inverted_duration_range() {
        let request = TripRequest::new(june(), DurationRange::new(10, 5));
        assert_eq!(
            trip_dates_possibilities(&request),
            Err(TripError::InvalidDurationRange {
                min_days: 10,
                max_days: 5
            })
        );
    }

    #[test]
    fn possibilities_may_be_empty_for_a_valid_request() {
        let request = TripRequest::new(
            VacationWindow::new(d(2024, 6, 1), d(2024, 6, 3)),
            DurationRange::new(3, 5),
        );
        assert_eq!(trip_dates_possibilities(&request), Ok(Vec::new()));
    }
}
