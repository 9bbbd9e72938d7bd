//! Whole-day calendar arithmetic over `NaiveDate`.

use crate::error::TripError;
use chrono::{Duration, NaiveDate};

/// Wire format for every date read or written by this crate.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `b - a` in whole days. Negative when `b` precedes `a`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use tripdates_core::dates::days_between;
/// let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
///
/// assert_eq!(days_between(start, end), 3);
/// assert_eq!(days_between(end, start), -3);
/// ```
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Returns the date `n` days after `date`. `n` may be negative.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use tripdates_core::dates::add_days;
/// let date = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
///
/// assert_eq!(add_days(date, 3), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(add_days(date, -27), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// ```
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Parse a `YYYY-MM-DD` string into a `NaiveDate`.
pub fn parse_date(input: &str) -> Result<NaiveDate, TripError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| TripError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// `2024-06-01`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_between_same_day_is_zero() {
        assert_eq!(days_between(d(2024, 6, 1), d(2024, 6, 1)), 0);
    }

    #[test]
    fn days_between_crosses_leap_february() {
        assert_eq!(days_between(d(2024, 2, 1), d(2024, 3, 1)), 29);
        assert_eq!(days_between(d(2023, 2, 1), d(2023, 3, 1)), 28);
    }

    #[test]
    fn days_between_spans_years() {
        assert_eq!(days_between(d(2023, 1, 1), d(2024, 1, 1)), 365);
        assert_eq!(days_between(d(2024, 1, 1), d(2025, 1, 1)), 366);
    }

    #[test]
    fn add_days_zero_is_identity() {
        assert_eq!(add_days(d(2024, 6, 30), 0), d(2024, 6, 30));
    }

    #[test]
    fn add_days_rolls_over_month_and_year() {
        assert_eq!(add_days(d(2024, 6, 30), 1), d(2024, 7, 1));
        assert_eq!(add_days(d(2024, 12, 25), 10), d(2025, 1, 4));
    }

    #[test]
    fn add_days_inverts_days_between() {
        let a = d(2024, 6, 1);
        let b = d(2025, 3, 17);
        assert_eq!(add_days(a, days_between(a, b)), b);
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-06-01").unwrap(), d(2024, 6, 1));
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn parse_date_rejects_impossible_and_foreign_formats() {
        for input in ["2023-02-29", "2024-13-01", "01/06/2024", "yesterday", ""] {
            let err = parse_date(input).unwrap_err();
            assert!(
                matches!(&err, TripError::InvalidDate { input: i, .. } if i == input),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn format_date_is_zero_padded() {
        assert_eq!(format_date(d(2024, 6, 1)), "2024-06-01");
    }
}
