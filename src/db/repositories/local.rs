//! In-memory local repository implementation.
//!
//! A local implementation of both repository traits suitable for unit
//! testing and local development. All data lives in memory behind an
//! `Arc<RwLock>`, giving fast, deterministic, isolated runs.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    ForecastRepository, RepositoryError, RepositoryResult, WindowRepository,
};
use crate::models::{
    CandidateWindow, Period, ShootingWindow, SkyConditions, SunWindow, Task, TaskId,
    WeatherSample, WindowId,
};
use crate::services::sun_windows::compute_sun_window;

/// In-memory local repository.
///
/// # Example
/// ```
/// use shutterplan::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// // Seed with insert_task_impl / insert_weather_impl / insert_sun_window_impl,
/// // or load a whole JSON fixture with from_json_str.
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    tasks: Vec<Task>,
    weather: Vec<WeatherSample>,
    sun_windows: Vec<SunWindow>,
    windows: Vec<ShootingWindow>,
    next_window_id: i64,
    is_healthy: bool,
}

/// JSON fixture document for seeding a repository in one call.
///
/// Weather samples carry raw conditions; the photo-day score is computed on
/// load, the same way forecast ingestion precomputes it. Sun windows carry
/// only sunrise/sunset; the phase periods are derived, never hand-written.
#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    weather_samples: Vec<RawSample>,
    #[serde(default)]
    sun_windows: Vec<RawSunWindow>,
}

#[derive(Debug, Deserialize)]
struct RawSample {
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    conditions: SkyConditions,
}

#[derive(Debug, Deserialize)]
struct RawSunWindow {
    date: NaiveDate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                next_window_id: 1,
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Create a repository seeded from a JSON fixture document with
    /// optional `tasks`, `weather_samples`, and `sun_windows` arrays.
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let fixture: Fixture = serde_json::from_str(json)
            .map_err(|e| RepositoryError::QueryError(format!("Invalid fixture JSON: {e}")))?;

        let repo = Self::new();
        for task in fixture.tasks {
            repo.insert_task_impl(task);
        }
        for raw in fixture.weather_samples {
            repo.insert_weather_impl(WeatherSample::from_conditions(raw.timestamp, raw.conditions));
        }
        for raw in fixture.sun_windows {
            repo.insert_sun_window_impl(compute_sun_window(raw.date, raw.sunrise, raw.sunset));
        }
        Ok(repo)
    }

    /// Seed a task.
    pub fn insert_task_impl(&self, task: Task) {
        self.data.write().unwrap().tasks.push(task);
    }

    /// Seed a weather sample.
    pub fn insert_weather_impl(&self, sample: WeatherSample) {
        self.data.write().unwrap().weather.push(sample);
    }

    /// Seed a sun window.
    pub fn insert_sun_window_impl(&self, sun: SunWindow) {
        self.data.write().unwrap().sun_windows.push(sun);
    }

    /// Toggle simulated backend health; an unhealthy repository fails all
    /// operations with `ConnectionError`.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }

    /// Count of currently stored shooting windows, across all tasks.
    pub fn window_count(&self) -> usize {
        self.data.read().unwrap().windows.len()
    }

    fn check_healthy(data: &LocalData) -> RepositoryResult<()> {
        if data.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::ConnectionError(
                "local repository marked unhealthy".to_string(),
            ))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn get_active_tasks(&self) -> RepositoryResult<Vec<Task>> {
        let data = self.data.read().unwrap();
        Self::check_healthy(&data)?;
        Ok(data.tasks.iter().filter(|t| t.active).cloned().collect())
    }

    async fn get_weather_samples(&self, range: &Period) -> RepositoryResult<Vec<WeatherSample>> {
        let data = self.data.read().unwrap();
        Self::check_healthy(&data)?;
        let mut samples: Vec<WeatherSample> = data
            .weather
            .iter()
            .filter(|s| range.contains(s.timestamp))
            .copied()
            .collect();
        samples.sort_by_key(|s| s.timestamp);
        Ok(samples)
    }

    async fn get_sun_windows(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<SunWindow>> {
        let data = self.data.read().unwrap();
        Self::check_healthy(&data)?;
        let mut windows: Vec<SunWindow> = data
            .sun_windows
            .iter()
            .filter(|w| w.date >= from && w.date <= to)
            .copied()
            .collect();
        windows.sort_by_key(|w| w.date);
        Ok(windows)
    }
}

#[async_trait]
impl WindowRepository for LocalRepository {
    async fn delete_windows_ending_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> RepositoryResult<usize> {
        let mut data = self.data.write().unwrap();
        Self::check_healthy(&data)?;
        let before = data.windows.len();
        data.windows.retain(|w| w.period.end >= cutoff);
        Ok(before - data.windows.len())
    }

    async fn insert_window(
        &self,
        task_id: &TaskId,
        window: &CandidateWindow,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<WindowId> {
        let mut data = self.data.write().unwrap();
        Self::check_healthy(&data)?;

        let id = WindowId::new(data.next_window_id);
        data.next_window_id += 1;
        data.windows.push(ShootingWindow {
            id: id.clone(),
            task_id: task_id.clone(),
            period: window.period,
            score: window.score,
            reason: window.reason.clone(),
            created_at,
        });
        Ok(id)
    }

    async fn get_windows_for_task(&self, task_id: &TaskId) -> RepositoryResult<Vec<ShootingWindow>> {
        let data = self.data.read().unwrap();
        Self::check_healthy(&data)?;
        let mut windows: Vec<ShootingWindow> = data
            .windows
            .iter()
            .filter(|w| &w.task_id == task_id)
            .cloned()
            .collect();
        windows.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.period.start.cmp(&b.period.start))
        });
        Ok(windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, day, hour, 0, 0).unwrap()
    }

    fn candidate(start: DateTime<Utc>, score: u8) -> CandidateWindow {
        CandidateWindow {
            period: Period::new(start, start + chrono::Duration::hours(1)),
            score,
            reason: "test window".to_string(),
        }
    }

    #[tokio::test]
    async fn active_task_filtering() {
        let repo = LocalRepository::new();
        let mut active: Task = serde_json::from_str(
            r#"{"id": "a", "title": "active", "condition": "any", "time_window": "any_day"}"#,
        )
        .unwrap();
        active.active = true;
        let mut paused = active.clone();
        paused.id = TaskId::new("b".to_string());
        paused.active = false;

        repo.insert_task_impl(active);
        repo.insert_task_impl(paused);

        let tasks = repo.get_active_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::new("a".to_string()));
    }

    #[tokio::test]
    async fn weather_samples_are_range_filtered_and_sorted() {
        let repo = LocalRepository::new();
        let conditions = SkyConditions {
            clouds: 20.0,
            precip: 0.0,
            visibility: 20.0,
            temp: 15.0,
        };
        repo.insert_weather_impl(WeatherSample::from_conditions(at(1, 12), conditions));
        repo.insert_weather_impl(WeatherSample::from_conditions(at(1, 10), conditions));
        repo.insert_weather_impl(WeatherSample::from_conditions(at(2, 10), conditions));

        let range = Period::new(at(1, 0), at(1, 23));
        let samples = repo.get_weather_samples(&range).await.unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp, at(1, 10));
        assert_eq!(samples[1].timestamp, at(1, 12));
    }

    #[tokio::test]
    async fn delete_sweep_removes_only_past_windows() {
        let repo = LocalRepository::new();
        let task_id = TaskId::new("t".to_string());
        repo.insert_window(&task_id, &candidate(at(1, 8), 80), at(1, 0))
            .await
            .unwrap();
        repo.insert_window(&task_id, &candidate(at(2, 8), 70), at(1, 0))
            .await
            .unwrap();

        let removed = repo.delete_windows_ending_before(at(1, 12)).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.window_count(), 1);

        let remaining = repo.get_windows_for_task(&task_id).await.unwrap();
        assert_eq!(remaining[0].period.start, at(2, 8));
    }

    #[tokio::test]
    async fn windows_come_back_ranked() {
        let repo = LocalRepository::new();
        let task_id = TaskId::new("t".to_string());
        repo.insert_window(&task_id, &candidate(at(1, 8), 60), at(1, 0))
            .await
            .unwrap();
        repo.insert_window(&task_id, &candidate(at(1, 10), 90), at(1, 0))
            .await
            .unwrap();
        repo.insert_window(&task_id, &candidate(at(1, 9), 90), at(1, 0))
            .await
            .unwrap();

        let windows = repo.get_windows_for_task(&task_id).await.unwrap();
        let order: Vec<(u8, DateTime<Utc>)> =
            windows.iter().map(|w| (w.score, w.period.start)).collect();
        assert_eq!(order, vec![(90, at(1, 9)), (90, at(1, 10)), (60, at(1, 8))]);
    }

    #[tokio::test]
    async fn unhealthy_repository_fails_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        assert!(matches!(
            repo.get_active_tasks().await,
            Err(RepositoryError::ConnectionError(_))
        ));
        assert!(matches!(
            repo.delete_windows_ending_before(at(1, 0)).await,
            Err(RepositoryError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn fixture_loading_computes_scores_and_sun_phases() {
        let repo = LocalRepository::from_json_str(
            r#"{
                "tasks": [
                    {"id": "t-1", "title": "dawn", "condition": "golden-hour-morning", "time_window": "any_day"}
                ],
                "weather_samples": [
                    {"timestamp": "2026-06-01T06:00:00Z", "clouds": 10.0, "precip": 0.0, "visibility": 25.0, "temp": 14.0}
                ],
                "sun_windows": [
                    {"date": "2026-06-01", "sunrise": "2026-06-01T05:30:00Z", "sunset": "2026-06-01T20:00:00Z"}
                ]
            }"#,
        )
        .unwrap();

        let tasks = repo.get_active_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);

        let range = Period::new(at(1, 0), at(1, 23));
        let samples = repo.get_weather_samples(&range).await.unwrap();
        assert_eq!(samples[0].photo_score, 100);

        let from = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let suns = repo.get_sun_windows(from, from).await.unwrap();
        assert_eq!(suns.len(), 1);
        // Phase periods were derived from sunrise/sunset, not read from JSON.
        assert_eq!(
            suns[0].golden_morning.start,
            at(1, 5) + chrono::Duration::minutes(10)
        );
    }

    #[test]
    fn malformed_fixture_is_a_query_error() {
        let result = LocalRepository::from_json_str("{not json");
        assert!(matches!(result, Err(RepositoryError::QueryError(_))));
    }
}
