use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::period::Period;
use super::task::TaskId;
use crate::define_id_type;

define_id_type!(i64, WindowId);

/// A candidate shooting window produced by the matcher for one task.
///
/// Candidates are in-memory values; they become [`ShootingWindow`]s when the
/// sync run ranks and persists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateWindow {
    pub period: Period,
    /// Quality score in [0, 100].
    pub score: u8,
    /// Human-readable justification, e.g.
    /// "Evening golden hour - Clear skies expected".
    pub reason: String,
}

/// A persisted shooting-window recommendation.
///
/// Lifecycle: created fresh each sync run; windows whose end is already in
/// the past are purged at the start of every run. The stored set is always
/// a complete re-derivation, never an incremental diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingWindow {
    pub id: WindowId,
    pub task_id: TaskId,
    pub period: Period,
    pub score: u8,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
