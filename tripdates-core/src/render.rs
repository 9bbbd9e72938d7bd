//! Pure Markdown rendering helpers.
//!
//! Summary: `# 135 trips between Sat, 01 Jun 2024 and Sun, 30 Jun 2024 (5 to 10 days)`
//! Table:
//!   | Start | End | Days |
//!   |:-|:-|-:|
//!   | Sat, 01 Jun 2024 | Thu, 06 Jun 2024 | 5 |

use crate::trip::{TripCandidate, TripRequest};
use chrono::NaiveDate;

/// Formats a date according to the user's configuration.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

pub fn format_summary(request: &TripRequest, count: usize, date_format: &str) -> String {
    let range = request.desired_trip_duration;
    let noun = if count == 1 { "trip" } else { "trips" };
    format!(
        "# {count} {noun} between {} and {} ({} to {} days)",
        format_date(request.vacation.start, date_format),
        format_date(request.vacation.end, date_format),
        range.min_days,
        range.max_days,
    )
}

pub fn format_candidate_row(candidate: &TripCandidate, date_format: &str) -> String {
    format!(
        "| {} | {} | {} |",
        format_date(candidate.trip_start_date, date_format),
        format_date(candidate.trip_end_date, date_format),
        candidate.duration
    )
}

/// Render all candidates as one table. Empty input renders nothing.
pub fn format_candidates_table(candidates: &[TripCandidate], date_format: &str) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    let mut md = String::from("| Start | End | Days |\n|:-|:-|-:|\n");
    for candidate in candidates {
        md.push_str(&format_candidate_row(candidate, date_format));
        md.push('\n');
    }
    md
}
