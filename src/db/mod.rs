//! Storage module for forecast data and shooting windows.
//!
//! This module abstracts storage behind the Repository pattern so different
//! backends can be swapped without touching the matching engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Trigger Layer (scheduler cron, on-demand API)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::sync) - Batch Run             │
//! │  - snapshot fetch, stale sweep, per-task matching       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  - ForecastRepository (tasks, weather, sun windows)     │
//! │  - WindowRepository (sweep + inserts)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Local Repository (in-memory)                           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Production row-store backends live with the excluded CRUD layers; this
//! crate ships only the in-memory implementation used for tests and local
//! development.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    ForecastRepository, FullRepository, RepositoryError, RepositoryResult, WindowRepository,
};
