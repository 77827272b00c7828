//! Task window matching.
//!
//! The heart of the planner: for one task, scan the forecast horizon and
//! produce candidate shooting windows. Sun-synchronized conditions evaluate
//! each day's precomputed golden/blue hour periods directly; weather-driven
//! conditions group consecutive matching hourly samples into contiguous
//! runs. Matching is pure: given the same task and forecast snapshot it
//! always yields the same candidates.

use chrono::{Duration, Timelike};

use crate::config::PlannerConfig;
use crate::models::{CandidateWindow, Period, SunPhase, SunWindow, Task, WeatherSample};

use super::weather_score::condition_match;

/// Score assigned to a sun window with no overlapping weather samples.
const NO_DATA_SCORE: u8 = 60;

/// Length of one hourly forecast slot; closes the final slot of a run.
const SLOT_MINUTES: i64 = 60;

/// How a task's condition is matched against the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Evaluate the day's precomputed sun-phase periods.
    SunSynchronized(&'static [SunPhase]),
    /// Group consecutive matching hourly samples into runs.
    WeatherDriven,
}

impl MatchStrategy {
    /// Pure classifier from condition to strategy.
    pub fn for_condition(condition: crate::models::Condition) -> Self {
        let phases = condition.sun_phases();
        if phases.is_empty() {
            MatchStrategy::WeatherDriven
        } else {
            MatchStrategy::SunSynchronized(phases)
        }
    }
}

/// Find all candidate shooting windows for one task.
///
/// `samples` must be ordered by timestamp ascending (the forecast source
/// guarantees this). The result is a flat, unranked candidate list; ranking
/// and truncation happen in [`super::ranking`].
pub fn find_matching_windows(
    task: &Task,
    samples: &[WeatherSample],
    sun_windows: &[SunWindow],
    config: &PlannerConfig,
) -> Vec<CandidateWindow> {
    match MatchStrategy::for_condition(task.condition) {
        MatchStrategy::SunSynchronized(phases) => {
            match_sun_phases(task, phases, samples, sun_windows, config)
        }
        MatchStrategy::WeatherDriven => match_weather_runs(task, samples, config),
    }
}

/// Weather verdict for one sun-phase period.
struct WeatherVerdict {
    score: u8,
    reason: String,
}

/// Sun-synchronized branch: one candidate per eligible phase per day.
fn match_sun_phases(
    task: &Task,
    phases: &[SunPhase],
    samples: &[WeatherSample],
    sun_windows: &[SunWindow],
    config: &PlannerConfig,
) -> Vec<CandidateWindow> {
    let slack = Duration::minutes(config.sample_slack_minutes);
    let mut windows = Vec::new();

    for sun in sun_windows {
        if !task.time_window.allows_date(sun.date) {
            continue;
        }

        for phase in phases {
            if !task.time_window.allows_half(phase.half) {
                continue;
            }

            let period = *sun.phase_period(*phase);
            let verdict = score_weather_in_period(samples, &period, slack);

            windows.push(CandidateWindow {
                period,
                score: verdict.score,
                reason: format!(
                    "{} {} hour - {}",
                    phase.half.label(),
                    phase.light.label(),
                    verdict.reason
                ),
            });
        }
    }

    windows
}

/// Average the photo-day scores of samples overlapping `period` (widened by
/// `slack` on both sides) and derive a reason from mean cloud cover, with
/// precipitation in any sample overriding the cloud reading.
///
/// No overlapping samples is not an error: the window gets a moderate
/// default score and an explanatory reason.
fn score_weather_in_period(
    samples: &[WeatherSample],
    period: &Period,
    slack: Duration,
) -> WeatherVerdict {
    let overlapping: Vec<&WeatherSample> = samples
        .iter()
        .filter(|s| period.contains_with_slack(s.timestamp, slack))
        .collect();

    if overlapping.is_empty() {
        return WeatherVerdict {
            score: NO_DATA_SCORE,
            reason: "No weather data available".to_string(),
        };
    }

    let count = overlapping.len() as f64;
    let score = (overlapping.iter().map(|s| s.photo_score as f64).sum::<f64>() / count).round();
    let avg_clouds =
        (overlapping.iter().map(|s| s.conditions.clouds).sum::<f64>() / count).round();
    let has_precip = overlapping.iter().any(|s| s.conditions.precip > 0.5);

    let reason = if has_precip {
        "Precipitation expected"
    } else if avg_clouds < 30.0 {
        "Clear skies expected"
    } else if avg_clouds < 60.0 {
        "Partly cloudy"
    } else {
        "Mostly cloudy"
    };

    WeatherVerdict {
        score: score as u8,
        reason: reason.to_string(),
    }
}

/// Weather-driven branch: run-length grouping of matching hourly samples.
///
/// A run breaks on a non-matching sample, on a sample filtered out by the
/// task's time window, or on a timestamp gap larger than
/// `max_sample_gap_minutes`. The gap rule keeps a morning-only task from
/// stitching 11:00 one day to 00:00 the next into a single window. A run
/// still open at the end of the scan is flushed.
fn match_weather_runs(
    task: &Task,
    samples: &[WeatherSample],
    config: &PlannerConfig,
) -> Vec<CandidateWindow> {
    let max_gap = Duration::minutes(config.max_sample_gap_minutes);
    let mut windows = Vec::new();
    let mut run: Vec<&WeatherSample> = Vec::new();

    for sample in samples {
        let ts = sample.timestamp;
        if !task.time_window.allows_hour(ts.hour()) || !task.time_window.allows_date(ts.date_naive())
        {
            flush_run(&mut run, &mut windows, task);
            continue;
        }

        let matched = condition_match(&sample.conditions, task.condition).matches;
        let contiguous = run
            .last()
            .map_or(true, |prev| ts - prev.timestamp <= max_gap);

        if matched && contiguous {
            run.push(sample);
        } else {
            flush_run(&mut run, &mut windows, task);
            if matched {
                run.push(sample);
            }
        }
    }

    flush_run(&mut run, &mut windows, task);
    windows
}

/// Close the current run (if any) into one candidate window.
fn flush_run(
    run: &mut Vec<&WeatherSample>,
    windows: &mut Vec<CandidateWindow>,
    task: &Task,
) {
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return;
    };

    let score = (run.iter().map(|s| s.photo_score as f64).sum::<f64>() / run.len() as f64).round();

    windows.push(CandidateWindow {
        period: Period::new(
            first.timestamp,
            last.timestamp + Duration::minutes(SLOT_MINUTES),
        ),
        score: score as u8,
        reason: format!(
            "{}h window with {} conditions",
            run.len(),
            task.condition.as_str()
        ),
    });
    run.clear();
}
