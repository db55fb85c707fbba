//! Plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Timetable, TravelSpot};

/// A saved trip plan.
///
/// Plans are owned by the store; the scheduling engine only receives a plan's
/// timetable-or-none and cart, and emits updated timetable values back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Title of the plan
    pub title: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Scheduled itinerary, absent until flights are set
    pub timetable: Option<Timetable>,

    /// Spots the user has picked, in selection order
    #[serde(default)]
    pub cart: Vec<TravelSpot>,
}
