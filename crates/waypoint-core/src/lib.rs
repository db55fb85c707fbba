//! Core library for the Waypoint travel itinerary planner.
//!
//! This crate provides the scheduling engine and business logic for building
//! day-by-day travel itineraries: deriving a calendar of days from a pair of
//! flights, placing cart spots into per-day period slots, editing placed
//! activities in place, and persisting plans in a SQLite store.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): plain immutable data: flights, spots,
//!   activities, sessions, days, the [`models::Timetable`].
//! - **Scheduling engine** ([`schedule`]): the only component that mutates a
//!   timetable, always by deriving a new value and committing it through a
//!   single sink path.
//! - **Addressing** ([`address`]): typed slot addresses with a lossless
//!   string-token form for the drag-and-drop transport layer.
//! - **Store** ([`store`]) and **service** ([`service`]): SQLite persistence
//!   and the async [`TripPlanner`] facade interface layers talk to.
//! - **Display** ([`display`]): markdown formatting for terminal output.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{TripPlannerBuilder, params::{CreatePlan, CartAdd}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! // Create a plan and pick a spot
//! let plan = planner.create_plan(&CreatePlan { title: Some("Tokyo".into()) }).await?;
//! planner.cart_add(&CartAdd { plan_id: plan.id, spot_id: "senso-ji".into() }).await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use address::{AddressError, DragSource, DropEvent, DropTarget, SlotAddress};
pub use display::{OperationStatus, PlanSummaries, SpotListing};
pub use error::{PlannerError, Result};
pub use models::{
    ActivityItem, ActivityPatch, DayPlan, FlexPeriod, FlightDetails, FlightPair, MealPeriod,
    Period, Plan, PlanSummary, Session, Timetable, TravelSpot,
};
pub use schedule::{DropOutcome, EditOutcome, Scheduler, TimetableSink};
pub use service::{TripPlanner, TripPlannerBuilder};
pub use store::Database;
