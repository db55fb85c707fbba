//! High-level trip planner API.
//!
//! This module provides the main [`TripPlanner`] interface: the coordinator
//! between interface layers and everything below them. Plan CRUD and cart
//! edits go straight to the [store](crate::store); scheduling operations load
//! the plan, run the [`Scheduler`](crate::schedule::Scheduler) with a
//! store-backed sink, and report the engine's outcome.
//!
//! All operations are async: the SQLite work runs inside
//! `tokio::task::spawn_blocking`, with a fresh connection per operation.
//!
//! ## Submodules
//!
//! - [`builder`]: factory for [`TripPlanner`] instances
//! - [`plan_ops`]: plan CRUD and cart management
//! - [`schedule_ops`]: flight confirmation, placement, moves, edits

use std::path::PathBuf;

pub mod builder;
pub mod plan_ops;
pub mod schedule_ops;

#[cfg(test)]
mod tests;

pub use builder::TripPlannerBuilder;

/// Main interface for managing trip plans and their itineraries.
pub struct TripPlanner {
    pub(crate) db_path: PathBuf,
}

impl TripPlanner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
