//! Weather scoring and condition matching for photography.
//!
//! Two pure evaluators live here: the photo-day score, a 0-100 composite
//! quality rating for a single weather sample, and the condition matcher,
//! which decides whether a sample satisfies a task's named condition and
//! explains why.

use crate::models::{Condition, SkyConditions};

/// Outcome of matching one weather sample against a condition requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionMatch {
    pub matches: bool,
    pub reason: String,
}

impl ConditionMatch {
    fn hit(reason: &str) -> Self {
        Self {
            matches: true,
            reason: reason.to_string(),
        }
    }

    fn miss(reason: &str) -> Self {
        Self {
            matches: false,
            reason: reason.to_string(),
        }
    }
}

/// Compute the photo-day score (0-100) for one conditions tuple.
///
/// Starts at 100 and subtracts one flat penalty per factor, looked up by
/// threshold band. Bands are mutually exclusive within each factor, so the
/// worst case is a single deduction per factor. The result is clamped to
/// [0, 100].
///
/// Deterministic and total: the same input always yields the same score.
pub fn photo_day_score(conditions: &SkyConditions) -> u8 {
    let mut score: i32 = 100;

    // Cloud cover: clear skies are best for golden hour, 20-40% adds drama,
    // heavy cover kills most outdoor work.
    score -= if conditions.clouds <= 20.0 {
        0
    } else if conditions.clouds <= 40.0 {
        5
    } else if conditions.clouds <= 60.0 {
        15
    } else if conditions.clouds <= 80.0 {
        30
    } else {
        45
    };

    // Precipitation in mm/h.
    score -= if conditions.precip <= 0.0 {
        0
    } else if conditions.precip <= 0.5 {
        20
    } else if conditions.precip <= 2.0 {
        35
    } else {
        50
    };

    // Visibility in km; low visibility can be artistic but scores lower.
    score -= if conditions.visibility >= 20.0 {
        0
    } else if conditions.visibility >= 10.0 {
        5
    } else if conditions.visibility >= 5.0 {
        10
    } else if conditions.visibility >= 1.0 {
        15
    } else {
        25
    };

    // Temperature comfort, a minor factor.
    score -= if (10.0..=25.0).contains(&conditions.temp) {
        0
    } else if (0.0..10.0).contains(&conditions.temp) || (25.0..=35.0).contains(&conditions.temp) {
        3
    } else {
        8
    };

    score.clamp(0, 100) as u8
}

/// Short human-readable description of a conditions tuple, e.g.
/// "few clouds, light drizzle" or "overcast, heavy rain, foggy".
pub fn describe_conditions(conditions: &SkyConditions) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.push(if conditions.clouds <= 10.0 {
        "clear skies"
    } else if conditions.clouds <= 30.0 {
        "few clouds"
    } else if conditions.clouds <= 60.0 {
        "partly cloudy"
    } else if conditions.clouds <= 85.0 {
        "mostly cloudy"
    } else {
        "overcast"
    });

    if conditions.precip > 2.0 {
        parts.push("heavy rain");
    } else if conditions.precip > 0.5 {
        parts.push("rain");
    } else if conditions.precip > 0.0 {
        parts.push("light drizzle");
    }

    // Visibility is only worth mentioning when notable.
    if conditions.visibility < 1.0 {
        parts.push("dense fog");
    } else if conditions.visibility < 5.0 {
        parts.push("foggy");
    } else if conditions.visibility < 10.0 {
        parts.push("misty");
    }

    parts.join(", ")
}

/// Decide whether one weather sample satisfies `condition`.
///
/// The default [`Condition::Any`] matches every conceivable tuple,
/// including pathological ones; unknown task input has already degraded to
/// `Any` during decoding, so this function is total.
pub fn condition_match(conditions: &SkyConditions, condition: Condition) -> ConditionMatch {
    match condition {
        Condition::ClearAny | Condition::ClearNoon => {
            if conditions.clouds <= 30.0 && conditions.precip == 0.0 {
                ConditionMatch::hit("Clear skies with low cloud cover")
            } else {
                ConditionMatch::miss("Too cloudy or precipitation expected")
            }
        }
        Condition::Overcast => {
            if conditions.clouds >= 70.0 && conditions.precip < 0.5 {
                ConditionMatch::hit("Overcast skies, good for portraits")
            } else {
                ConditionMatch::miss("Not enough cloud cover")
            }
        }
        Condition::Cloudy => {
            if conditions.clouds >= 40.0 && conditions.precip < 0.5 {
                ConditionMatch::hit("Cloudy conditions for soft light")
            } else {
                ConditionMatch::miss("Conditions too clear or rainy")
            }
        }
        Condition::Fog => {
            if conditions.visibility < 5.0 && conditions.precip < 0.5 {
                ConditionMatch::hit("Foggy/misty conditions")
            } else {
                ConditionMatch::miss("No fog or mist present")
            }
        }
        Condition::GoldenHourMorning
        | Condition::GoldenHourEvening
        | Condition::GoldenHourAny
        | Condition::BlueHourMorning
        | Condition::BlueHourEvening => {
            // Time placement is handled by the sun-window branch; weather
            // still has to cooperate.
            if conditions.clouds <= 50.0 && conditions.precip == 0.0 {
                ConditionMatch::hit("Good conditions for golden/blue hour")
            } else {
                ConditionMatch::miss("Weather may obscure golden/blue hour effect")
            }
        }
        Condition::Any => ConditionMatch::hit("Any weather conditions acceptable"),
    }
}
