//! # Shutterplan
//!
//! Photography-conditions planning engine.
//!
//! This crate matches recurring photography tasks (each with a desired
//! lighting or weather condition and a day/time constraint) against a
//! forecast horizon of hourly weather samples and daily sun windows, and
//! produces ranked, scored shooting-window recommendations.
//!
//! ## Features
//!
//! - **Sun windows**: golden/blue hour intervals derived from sunrise and
//!   sunset via fixed minute offsets
//! - **Weather scoring**: a 0-100 photo-day score per weather sample, plus
//!   per-condition match predicates with human-readable reasons
//! - **Window matching**: sun-synchronized and weather-driven matching
//!   strategies producing candidate shooting windows per task
//! - **Ranking & persistence**: score-ranked, capped window sets committed
//!   through a storage-agnostic repository interface
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types (tasks, weather samples, sun windows, shooting
//!   windows, time periods)
//! - [`services`]: the pure matching engine and the batch sync run
//! - [`db`]: repository traits and the in-memory backend
//! - [`config`]: planner tunables loaded from TOML
//!
//! The engine itself is pure and deterministic: the sync run reads a
//! snapshot through [`db::ForecastRepository`], computes windows with an
//! explicit `now`, and writes results through [`db::WindowRepository`].

pub mod config;
pub mod db;
pub mod models;
pub mod services;
