//! Planner configuration file support.
//!
//! Tunables for the matching engine and sync run, read from a TOML file
//! with serde defaults so a missing or partial file still yields a working
//! configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Planner tunables.
///
/// Defaults mirror the production setup: a 72-hour weather horizon, three
/// days of sun windows, five windows per task, and hourly sampling (which
/// fixes both the slack tolerance and the run-continuity gap at 60
/// minutes). If the sampling frequency ever changes, scale
/// `sample_slack_minutes` and `max_sample_gap_minutes` with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// How far ahead to fetch hourly weather samples.
    #[serde(default = "default_forecast_horizon_hours")]
    pub forecast_horizon_hours: i64,
    /// How many days of sun windows to consider.
    #[serde(default = "default_sun_lookahead_days")]
    pub sun_lookahead_days: i64,
    /// Ranked windows kept per task.
    #[serde(default = "default_max_windows_per_task")]
    pub max_windows_per_task: usize,
    /// Tolerance when gathering samples around a sun window, so coarse
    /// hourly samples that straddle the window boundary still count.
    #[serde(default = "default_sample_slack_minutes")]
    pub sample_slack_minutes: i64,
    /// Largest timestamp gap between consecutive samples of one
    /// weather-driven run. Larger gaps break the run.
    #[serde(default = "default_max_sample_gap_minutes")]
    pub max_sample_gap_minutes: i64,
}

fn default_forecast_horizon_hours() -> i64 {
    72
}

fn default_sun_lookahead_days() -> i64 {
    3
}

fn default_max_windows_per_task() -> usize {
    5
}

fn default_sample_slack_minutes() -> i64 {
    60
}

fn default_max_sample_gap_minutes() -> i64 {
    60
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            forecast_horizon_hours: default_forecast_horizon_hours(),
            sun_lookahead_days: default_sun_lookahead_days(),
            max_windows_per_task: default_max_windows_per_task(),
            sample_slack_minutes: default_sample_slack_minutes(),
            max_sample_gap_minutes: default_max_sample_gap_minutes(),
        }
    }
}

impl PlannerConfig {
    /// Load planner configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;

        toml::from_str(&content).context("Failed to parse planner config")
    }

    /// Load planner configuration from the default locations, falling back
    /// to defaults when no file exists.
    ///
    /// Searches for `shutterplan.toml` in the current directory, then the
    /// parent directory.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("shutterplan.toml"),
            PathBuf::from("../shutterplan.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}
