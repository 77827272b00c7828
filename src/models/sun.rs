use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::period::Period;
use super::task::{DayHalf, LightPhase, SunPhase};

/// Per-date record of sunrise/sunset and the derived golden/blue hour
/// windows.
///
/// The four phase periods are computed deterministically from sunrise and
/// sunset by [`crate::services::sun_windows::compute_sun_window`]; they are
/// never edited independently, and are recomputed whenever sunrise/sunset
/// for the date is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunWindow {
    pub date: NaiveDate,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub golden_morning: Period,
    pub golden_evening: Period,
    pub blue_morning: Period,
    pub blue_evening: Period,
}

impl SunWindow {
    /// The period for one sun-synchronized sub-window.
    pub fn phase_period(&self, phase: SunPhase) -> &Period {
        match (phase.light, phase.half) {
            (LightPhase::Golden, DayHalf::Morning) => &self.golden_morning,
            (LightPhase::Golden, DayHalf::Evening) => &self.golden_evening,
            (LightPhase::Blue, DayHalf::Morning) => &self.blue_morning,
            (LightPhase::Blue, DayHalf::Evening) => &self.blue_evening,
        }
    }

    /// Which golden-hour half (if any) `instant` falls in.
    pub fn golden_hour_at(&self, instant: DateTime<Utc>) -> Option<DayHalf> {
        if self.golden_morning.contains(instant) {
            Some(DayHalf::Morning)
        } else if self.golden_evening.contains(instant) {
            Some(DayHalf::Evening)
        } else {
            None
        }
    }

    /// Which blue-hour half (if any) `instant` falls in.
    pub fn blue_hour_at(&self, instant: DateTime<Utc>) -> Option<DayHalf> {
        if self.blue_morning.contains(instant) {
            Some(DayHalf::Morning)
        } else if self.blue_evening.contains(instant) {
            Some(DayHalf::Evening)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sun_windows::compute_sun_window;
    use chrono::TimeZone;

    fn sample_window() -> SunWindow {
        let sunrise = Utc.with_ymd_and_hms(2026, 6, 1, 5, 30, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2026, 6, 1, 20, 0, 0).unwrap();
        compute_sun_window(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            sunrise,
            sunset,
        )
    }

    #[test]
    fn phase_period_selects_matching_window() {
        let sun = sample_window();
        assert_eq!(sun.phase_period(SunPhase::GOLDEN_MORNING), &sun.golden_morning);
        assert_eq!(sun.phase_period(SunPhase::BLUE_EVENING), &sun.blue_evening);
    }

    #[test]
    fn golden_hour_lookup_by_instant() {
        let sun = sample_window();
        assert_eq!(sun.golden_hour_at(sun.sunrise), Some(DayHalf::Morning));
        assert_eq!(sun.golden_hour_at(sun.sunset), Some(DayHalf::Evening));

        let noon = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(sun.golden_hour_at(noon), None);
    }

    #[test]
    fn blue_hour_lookup_by_instant() {
        let sun = sample_window();
        assert_eq!(sun.blue_hour_at(sun.blue_morning.start), Some(DayHalf::Morning));
        assert_eq!(sun.blue_hour_at(sun.blue_evening.end), Some(DayHalf::Evening));
        assert_eq!(sun.blue_hour_at(sun.sunrise), None);
    }
}
