//! The window sync run.
//!
//! A single-threaded, run-to-completion batch: read a consistent snapshot
//! of tasks and forecast data, sweep stale windows once globally, then
//! match and insert ranked windows per task. The run takes `now` as an
//! explicit argument so it stays deterministic, and it is idempotent: a
//! repeated trigger recomputes the same set from scratch.
//!
//! One task failing to plan does not abort the batch; partial success is
//! the normal operating mode. Storage failures are fatal and surface to
//! the caller for retry.

use anyhow::Result;
use chrono::{DateTime, Days, Duration, Utc};
use log::{info, warn};

use crate::config::PlannerConfig;
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{CandidateWindow, Period, SunWindow, Task, WeatherSample};

use super::matcher::find_matching_windows;
use super::ranking::rank_candidates;

/// Summary of one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub tasks_processed: usize,
    pub tasks_failed: usize,
    pub windows_created: usize,
}

/// Run the full task-window sync against `repo`, with `now` as the run's
/// clock value.
///
/// Order matters: the stale-window sweep is a single global barrier that
/// happens before any insert of this run.
pub async fn run_window_sync<R: FullRepository>(
    repo: &R,
    now: DateTime<Utc>,
    config: &PlannerConfig,
) -> RepositoryResult<SyncReport> {
    info!("Calculating task windows...");

    let tasks = repo.get_active_tasks().await?;
    if tasks.is_empty() {
        info!("No active tasks found");
        return Ok(SyncReport::default());
    }

    let horizon = Period::new(now, now + Duration::hours(config.forecast_horizon_hours));
    let samples = repo.get_weather_samples(&horizon).await?;

    let from = now.date_naive();
    let to = from + Days::new(config.sun_lookahead_days as u64);
    let sun_windows = repo.get_sun_windows(from, to).await?;

    let swept = repo.delete_windows_ending_before(now).await?;
    if swept > 0 {
        info!("Purged {swept} stale task windows");
    }

    let mut report = SyncReport::default();
    for task in &tasks {
        let ranked = match plan_task(task, &samples, &sun_windows, config) {
            Ok(windows) => windows,
            Err(e) => {
                warn!("Skipping task {}: {e:#}", task.id);
                report.tasks_failed += 1;
                continue;
            }
        };

        for window in &ranked {
            repo.insert_window(&task.id, window, now).await?;
            report.windows_created += 1;
        }
        report.tasks_processed += 1;
    }

    info!(
        "Created {} task windows for {} tasks",
        report.windows_created, report.tasks_processed
    );
    Ok(report)
}

/// Plan one task in isolation: match, rank, cap.
///
/// The `Result` is the per-task failure boundary; errors here are logged
/// and counted by the caller instead of aborting the batch.
fn plan_task(
    task: &Task,
    samples: &[WeatherSample],
    sun_windows: &[SunWindow],
    config: &PlannerConfig,
) -> Result<Vec<CandidateWindow>> {
    let candidates = find_matching_windows(task, samples, sun_windows, config);
    Ok(rank_candidates(candidates, config.max_windows_per_task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::RepositoryError;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, day, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn no_active_tasks_short_circuits() {
        let repo = LocalRepository::new();
        let report = run_window_sync(&repo, at(1, 0), &PlannerConfig::default())
            .await
            .unwrap();

        assert_eq!(report, SyncReport::default());
        assert_eq!(repo.window_count(), 0);
    }

    #[tokio::test]
    async fn unhealthy_storage_is_fatal() {
        let repo = LocalRepository::from_json_str(
            r#"{"tasks": [{"id": "t-1", "title": "x", "condition": "any", "time_window": "any_day"}]}"#,
        )
        .unwrap();
        repo.set_healthy(false);

        let result = run_window_sync(&repo, at(1, 0), &PlannerConfig::default()).await;
        assert!(matches!(result, Err(RepositoryError::ConnectionError(_))));
    }
}
