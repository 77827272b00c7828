//! Forecast-source repository trait.
//!
//! The read side of the engine's storage boundary: active tasks, hourly
//! weather samples, and per-date sun windows. Forecast ingestion itself
//! (external weather/places APIs) lives outside this crate; implementations
//! only need to hand back what ingestion already stored.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::models::{Period, SunWindow, Task, WeatherSample};

/// Repository trait for reading the forecast snapshot a sync run works on.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ForecastRepository: Send + Sync {
    /// Check if the backing store is reachable and healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All tasks currently marked active.
    async fn get_active_tasks(&self) -> RepositoryResult<Vec<Task>>;

    /// Weather samples whose timestamp falls within `range` (inclusive),
    /// ordered by timestamp ascending.
    async fn get_weather_samples(&self, range: &Period) -> RepositoryResult<Vec<WeatherSample>>;

    /// Sun windows for dates in `[from, to]` (inclusive), ordered by date.
    async fn get_sun_windows(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<SunWindow>>;
}
