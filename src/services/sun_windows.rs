//! Golden/blue hour window derivation.
//!
//! Golden hour is approximated with fixed minute offsets from sunrise and
//! sunset rather than true solar elevation; blue hour is a fixed-duration
//! window adjacent to golden hour. Good enough for photography planning,
//! and fully deterministic.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{Period, SunWindow};

/// Minutes of golden light before sunrise.
pub const GOLDEN_BEFORE_SUNRISE_MIN: i64 = 20;
/// Minutes of golden light after sunrise.
pub const GOLDEN_AFTER_SUNRISE_MIN: i64 = 50;
/// Minutes of golden light before sunset.
pub const GOLDEN_BEFORE_SUNSET_MIN: i64 = 60;
/// Minutes of golden light after sunset.
pub const GOLDEN_AFTER_SUNSET_MIN: i64 = 20;
/// Blue hour duration in minutes, adjacent to each golden window.
pub const BLUE_DURATION_MIN: i64 = 30;

/// Derive the golden/blue hour windows for one date from its sunrise and
/// sunset instants.
///
/// The caller guarantees `sunrise < sunset` on the same calendar day; there
/// is no failure path. Morning blue hour ends exactly where morning golden
/// hour starts, and evening blue hour starts exactly where evening golden
/// hour ends.
pub fn compute_sun_window(
    date: NaiveDate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> SunWindow {
    let golden_morning = Period::new(
        sunrise - Duration::minutes(GOLDEN_BEFORE_SUNRISE_MIN),
        sunrise + Duration::minutes(GOLDEN_AFTER_SUNRISE_MIN),
    );
    let golden_evening = Period::new(
        sunset - Duration::minutes(GOLDEN_BEFORE_SUNSET_MIN),
        sunset + Duration::minutes(GOLDEN_AFTER_SUNSET_MIN),
    );
    let blue_morning = Period::new(
        golden_morning.start - Duration::minutes(BLUE_DURATION_MIN),
        golden_morning.start,
    );
    let blue_evening = Period::new(
        golden_evening.end,
        golden_evening.end + Duration::minutes(BLUE_DURATION_MIN),
    );

    SunWindow {
        date,
        sunrise,
        sunset,
        golden_morning,
        golden_evening,
        blue_morning,
        blue_evening,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn offsets_from_sunrise_and_sunset() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let sunrise = Utc.with_ymd_and_hms(2026, 6, 1, 5, 30, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2026, 6, 1, 20, 0, 0).unwrap();

        let sun = compute_sun_window(date, sunrise, sunset);

        assert_eq!(sun.golden_morning.start, sunrise - Duration::minutes(20));
        assert_eq!(sun.golden_morning.end, sunrise + Duration::minutes(50));
        assert_eq!(sun.golden_evening.start, sunset - Duration::minutes(60));
        assert_eq!(sun.golden_evening.end, sunset + Duration::minutes(20));
        assert_eq!(sun.blue_morning.end, sun.golden_morning.start);
        assert_eq!(
            sun.blue_morning.start,
            sun.golden_morning.start - Duration::minutes(30)
        );
        assert_eq!(sun.blue_evening.start, sun.golden_evening.end);
        assert_eq!(
            sun.blue_evening.end,
            sun.golden_evening.end + Duration::minutes(30)
        );
    }

    proptest! {
        // For any sunrise < sunset the derived windows keep their ordering:
        // blue morning precedes and abuts golden morning, and the evening
        // side mirrors it.
        #[test]
        fn window_ordering_invariants(
            sunrise_min in 0i64..(12 * 60),
            day_len_min in (60i64)..(18 * 60),
        ) {
            let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
            let midnight = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
            let sunrise = midnight + Duration::minutes(sunrise_min);
            let sunset = sunrise + Duration::minutes(day_len_min);

            let sun = compute_sun_window(date, sunrise, sunset);

            prop_assert!(sun.blue_morning.start < sun.blue_morning.end);
            prop_assert_eq!(sun.blue_morning.end, sun.golden_morning.start);
            prop_assert!(sun.golden_morning.start < sun.golden_morning.end);
            prop_assert!(sun.golden_morning.end <= sunrise + Duration::minutes(50));

            prop_assert!(sun.golden_evening.start < sun.golden_evening.end);
            prop_assert_eq!(sun.golden_evening.end, sun.blue_evening.start);
            prop_assert!(sun.blue_evening.start < sun.blue_evening.end);
        }

        // Same inputs, same outputs.
        #[test]
        fn derivation_is_deterministic(sunrise_min in 0i64..720, day_len_min in 60i64..1080) {
            let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
            let midnight = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
            let sunrise = midnight + Duration::minutes(sunrise_min);
            let sunset = sunrise + Duration::minutes(day_len_min);

            prop_assert_eq!(
                compute_sun_window(date, sunrise, sunset),
                compute_sun_window(date, sunrise, sunset)
            );
        }
    }
}
