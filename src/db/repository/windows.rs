//! Shooting-window repository trait.
//!
//! The write side of the storage boundary. The sync run's contract is
//! delete-then-insert: one global sweep of stale windows at the start of a
//! run, followed by inserts of the freshly computed set. There is no
//! update-in-place.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::RepositoryResult;
use crate::models::{CandidateWindow, ShootingWindow, TaskId, WindowId};

/// Repository trait for persisting ranked shooting windows.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait WindowRepository: Send + Sync {
    /// Delete every stored window whose end instant is before `cutoff`,
    /// across all tasks. Returns the number of windows removed.
    async fn delete_windows_ending_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> RepositoryResult<usize>;

    /// Insert one ranked window for a task. `created_at` is the run's
    /// explicit clock value, not a wall-clock read.
    async fn insert_window(
        &self,
        task_id: &TaskId,
        window: &CandidateWindow,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<WindowId>;

    /// All stored windows for one task, ordered by score descending then
    /// start ascending (the ranking order they were inserted in).
    async fn get_windows_for_task(&self, task_id: &TaskId) -> RepositoryResult<Vec<ShootingWindow>>;
}
