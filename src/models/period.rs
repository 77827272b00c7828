use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single time period with start and end instants.
///
/// A `Period` defines a contiguous UTC time interval. It is used for
/// golden/blue hour windows, shooting windows, and forecast query ranges.
/// Constructors do not validate ordering; callers guarantee `start <= end`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shutterplan::models::Period;
///
/// let period = Period::new(
///     Utc.with_ymd_and_hms(2026, 6, 1, 6, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap(),
/// );
///
/// assert_eq!(period.duration_hours(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    /// Creates a new time period.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the duration of this period in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Returns `true` if `instant` falls within the period (inclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Returns `true` if `instant` falls within the period widened by
    /// `slack` on both sides.
    ///
    /// Used when gathering coarse hourly samples for a sun window whose
    /// boundaries do not align with the sampling grid.
    pub fn contains_with_slack(&self, instant: DateTime<Utc>, slack: Duration) -> bool {
        instant >= self.start - slack && instant <= self.end + slack
    }
}
