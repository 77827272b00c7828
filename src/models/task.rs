//! Task model: a recurring photography intent with a desired condition and
//! a day/time constraint.
//!
//! Tasks are produced by an external sync process and are read-only to the
//! engine. Unknown `condition` or `time_window` strings degrade to
//! [`Condition::Any`] / [`TimeWindow::AnyDay`] rather than failing, so
//! malformed upstream config never blocks a run.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use crate::define_id_type;

define_id_type!(String, TaskId);

/// Which half of the day a sun phase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayHalf {
    Morning,
    Evening,
}

impl DayHalf {
    /// Capitalized label used in window reasons ("Morning golden hour - ...").
    pub fn label(&self) -> &'static str {
        match self {
            DayHalf::Morning => "Morning",
            DayHalf::Evening => "Evening",
        }
    }
}

/// The two kinds of sun-synchronized light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightPhase {
    Golden,
    Blue,
}

impl LightPhase {
    pub fn label(&self) -> &'static str {
        match self {
            LightPhase::Golden => "golden",
            LightPhase::Blue => "blue",
        }
    }
}

/// One concrete sun-synchronized sub-window (e.g. morning golden hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunPhase {
    pub light: LightPhase,
    pub half: DayHalf,
}

impl SunPhase {
    pub const GOLDEN_MORNING: SunPhase = SunPhase {
        light: LightPhase::Golden,
        half: DayHalf::Morning,
    };
    pub const GOLDEN_EVENING: SunPhase = SunPhase {
        light: LightPhase::Golden,
        half: DayHalf::Evening,
    };
    pub const BLUE_MORNING: SunPhase = SunPhase {
        light: LightPhase::Blue,
        half: DayHalf::Morning,
    };
    pub const BLUE_EVENING: SunPhase = SunPhase {
        light: LightPhase::Blue,
        half: DayHalf::Evening,
    };
}

/// Desired lighting/weather condition for a task.
///
/// This is a closed enum: every task resolves to exactly one variant, with
/// unrecognized input mapping to [`Condition::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    GoldenHourMorning,
    GoldenHourEvening,
    GoldenHourAny,
    BlueHourMorning,
    BlueHourEvening,
    Fog,
    Overcast,
    ClearNoon,
    ClearAny,
    Cloudy,
    Any,
}

impl Condition {
    /// Parse a condition string. Unknown or empty input maps to `Any`.
    pub fn parse(s: &str) -> Self {
        match s {
            "golden-hour-morning" => Condition::GoldenHourMorning,
            "golden-hour-evening" => Condition::GoldenHourEvening,
            "golden-hour-any" => Condition::GoldenHourAny,
            "blue-hour-morning" => Condition::BlueHourMorning,
            "blue-hour-evening" => Condition::BlueHourEvening,
            "fog" => Condition::Fog,
            "overcast" => Condition::Overcast,
            "clear-noon" => Condition::ClearNoon,
            "clear-any" => Condition::ClearAny,
            "cloudy" => Condition::Cloudy,
            _ => Condition::Any,
        }
    }

    /// Canonical kebab-case name, as it appears in task config and reasons.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::GoldenHourMorning => "golden-hour-morning",
            Condition::GoldenHourEvening => "golden-hour-evening",
            Condition::GoldenHourAny => "golden-hour-any",
            Condition::BlueHourMorning => "blue-hour-morning",
            Condition::BlueHourEvening => "blue-hour-evening",
            Condition::Fog => "fog",
            Condition::Overcast => "overcast",
            Condition::ClearNoon => "clear-noon",
            Condition::ClearAny => "clear-any",
            Condition::Cloudy => "cloudy",
            Condition::Any => "any",
        }
    }

    /// The sun-synchronized sub-windows this condition targets.
    ///
    /// Empty for weather-driven conditions; the matcher uses this both to
    /// classify the strategy and to select which phase periods to evaluate.
    pub fn sun_phases(&self) -> &'static [SunPhase] {
        match self {
            Condition::GoldenHourMorning => &[SunPhase::GOLDEN_MORNING],
            Condition::GoldenHourEvening => &[SunPhase::GOLDEN_EVENING],
            Condition::GoldenHourAny => &[SunPhase::GOLDEN_MORNING, SunPhase::GOLDEN_EVENING],
            Condition::BlueHourMorning => &[SunPhase::BLUE_MORNING],
            Condition::BlueHourEvening => &[SunPhase::BLUE_EVENING],
            _ => &[],
        }
    }

    /// Returns `true` if this condition is tied to sun windows rather than
    /// to hourly weather runs.
    pub fn is_sun_synchronized(&self) -> bool {
        !self.sun_phases().is_empty()
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day/time constraint restricting when a task's windows may fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    AnyDay,
    MorningOnly,
    EveningOnly,
    WeekendOnly,
    WeekdayOnly,
}

impl TimeWindow {
    /// Parse a time-window string. Unknown or empty input maps to `AnyDay`.
    pub fn parse(s: &str) -> Self {
        match s {
            "morning_only" => TimeWindow::MorningOnly,
            "evening_only" => TimeWindow::EveningOnly,
            "weekend_only" => TimeWindow::WeekendOnly,
            "weekday_only" => TimeWindow::WeekdayOnly,
            _ => TimeWindow::AnyDay,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::AnyDay => "any_day",
            TimeWindow::MorningOnly => "morning_only",
            TimeWindow::EveningOnly => "evening_only",
            TimeWindow::WeekendOnly => "weekend_only",
            TimeWindow::WeekdayOnly => "weekday_only",
        }
    }

    /// Weekend/weekday filter by calendar date (UTC).
    pub fn allows_date(&self, date: NaiveDate) -> bool {
        let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        match self {
            TimeWindow::WeekendOnly => is_weekend,
            TimeWindow::WeekdayOnly => !is_weekend,
            _ => true,
        }
    }

    /// Morning/evening filter by hour-of-day (UTC). Morning is `hour < 12`.
    pub fn allows_hour(&self, hour: u32) -> bool {
        match self {
            TimeWindow::MorningOnly => hour < 12,
            TimeWindow::EveningOnly => hour >= 12,
            _ => true,
        }
    }

    /// Morning/evening filter for sun-phase sub-windows.
    pub fn allows_half(&self, half: DayHalf) -> bool {
        match (self, half) {
            (TimeWindow::MorningOnly, DayHalf::Evening) => false,
            (TimeWindow::EveningOnly, DayHalf::Morning) => false,
            _ => true,
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geographic point attached to a task (fixed shooting location).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A recurring photography task.
///
/// Produced by the external sheet-import sync; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default = "default_condition", deserialize_with = "lenient_condition")]
    pub condition: Condition,
    #[serde(default = "default_time_window", deserialize_with = "lenient_time_window")]
    pub time_window: TimeWindow,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_condition() -> Condition {
    Condition::Any
}

fn default_time_window() -> TimeWindow {
    TimeWindow::AnyDay
}

fn default_active() -> bool {
    true
}

/// Deserialize a condition from any string, falling back to `Any`.
fn lenient_condition<'de, D>(deserializer: D) -> Result<Condition, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Condition::parse(&raw))
}

/// Deserialize a time window from any string, falling back to `AnyDay`.
fn lenient_time_window<'de, D>(deserializer: D) -> Result<TimeWindow, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(TimeWindow::parse(&raw))
}
