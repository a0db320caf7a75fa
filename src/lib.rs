//! # waste-routing
//!
//! Daily waste-collection planning: sensor-driven bin selection,
//! nearest-neighbor collection routing, and route costing with recycling
//! revenue and environmental impact.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Bin, Fleet, CollectionCandidate, Route, CostBreakdown)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`selection`] — Fill-level and age based bin selection
//! - [`constructive`] — Nearest-neighbor route construction
//! - [`evaluation`] — Route costing
//! - [`estimation`] — Yield estimation and environmental impact
//! - [`sensors`] — Sensor collaborator and simulator
//! - [`cycle`] — Daily collection cycle orchestration and reporting
//! - [`config`] — Cycle configuration (JSON)
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Crate error type

pub mod config;
pub mod constructive;
pub mod cycle;
pub mod distance;
pub mod error;
pub mod estimation;
pub mod evaluation;
pub mod logging;
pub mod models;
pub mod selection;
pub mod sensors;

pub use error::{Result, WasteError};
