use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time tuple of the weather factors the planner scores.
///
/// Units: cloud cover in percent [0, 100], precipitation in mm/h,
/// visibility in km, temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyConditions {
    pub clouds: f64,
    pub precip: f64,
    pub visibility: f64,
    pub temp: f64,
}

/// A single hourly weather observation for a location.
///
/// Immutable once produced by forecast ingestion; `photo_score` is the
/// precomputed photo-day score for `conditions`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub conditions: SkyConditions,
    pub photo_score: u8,
}

impl WeatherSample {
    /// Build a sample with its photo-day score computed from `conditions`.
    pub fn from_conditions(timestamp: DateTime<Utc>, conditions: SkyConditions) -> Self {
        Self {
            timestamp,
            conditions,
            photo_score: crate::services::weather_score::photo_day_score(&conditions),
        }
    }
}
