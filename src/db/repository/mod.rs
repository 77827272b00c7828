//! Repository trait definitions for storage operations.
//!
//! The engine never embeds storage-specific query syntax; persistence is an
//! injected dependency behind these traits, which keeps the matching core
//! testable in isolation with in-memory fakes.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`forecast`]: Read side — tasks, weather samples, sun windows
//! - [`windows`]: Write side — shooting-window sweep and inserts
//!
//! # Convenience Trait Bound
//!
//! For functions that need both sides, use the [`FullRepository`] bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     let tasks = repo.get_active_tasks().await?;
//!     repo.delete_windows_ending_before(now).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod forecast;
pub mod windows;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export traits
pub use forecast::ForecastRepository;
pub use windows::WindowRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type implementing both repository
/// traits; the sync run takes this bound so one backend serves both the
/// forecast snapshot and the window sink.
pub trait FullRepository: ForecastRepository + WindowRepository {}

// Blanket implementation: both traits together make a full repository
impl<T> FullRepository for T where T: ForecastRepository + WindowRepository {}
