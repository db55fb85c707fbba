//! Data models for plans, flights, and the scheduled timetable.
//!
//! This module contains the core domain models of the Waypoint itinerary
//! planner. Display implementations live in [`crate::display::models`] to keep
//! data structures and presentation logic separate.
//!
//! The central structure is the [`Timetable`]: a [`FlightPair`] plus one
//! [`DayPlan`] per calendar day of the trip. Each day offers six period slots
//! ([`Period`]) holding [`Session`]s, and sessions hold ordered
//! [`ActivityItem`]s. All of it is plain immutable data; the operations that
//! derive new timetable values live in [`crate::schedule`].

pub mod activity;
pub mod day;
pub mod flight;
pub mod period;
pub mod plan;
pub mod session;
pub mod spot;
pub mod summary;
pub mod timetable;


// Re-export all public types at the models level
pub use activity::{ActivityItem, ActivityPatch};
pub use day::DayPlan;
pub use flight::{FlightDetails, FlightPair};
pub use period::{FlexPeriod, MealPeriod, Period};
pub use plan::Plan;
pub use session::Session;
pub use spot::{City, TravelSpot};
pub use summary::PlanSummary;
pub use timetable::Timetable;
