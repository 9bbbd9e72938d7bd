pub mod config;
pub mod dates;
pub mod enumerate;
pub mod error;
pub mod output;
pub mod render;
pub mod trip;
pub mod validate;

pub use config::Config;
pub use enumerate::{candidate_count, enumerate, trip_dates_possibilities};
pub use error::TripError;
pub use trip::{DurationRange, TripCandidate, TripRequest, VacationWindow};
