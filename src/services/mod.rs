//! Service layer: the pure matching engine and the batch sync run.
//!
//! Everything here except [`sync`] is pure computation over in-memory
//! values; `sync` orchestrates a run against the repository traits.

pub mod matcher;
pub mod ranking;
pub mod sun_windows;
pub mod sync;
pub mod weather_score;

pub use matcher::{find_matching_windows, MatchStrategy};
pub use ranking::rank_candidates;
pub use sun_windows::compute_sun_window;
pub use sync::{run_window_sync, SyncReport};
pub use weather_score::{condition_match, describe_conditions, photo_day_score, ConditionMatch};
