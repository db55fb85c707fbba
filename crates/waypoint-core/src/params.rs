//! Parameter structures for Waypoint operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers wrap these
//! with their own derives (e.g. clap arg structs) and convert down via
//! `From`/`Into`, so core logic never sees framework types.

use serde::{Deserialize, Serialize};

use crate::address::SlotAddress;
use crate::models::{ActivityPatch, FlexPeriod, FlightPair};

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for creating a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the plan; a numbered default is used when absent
    pub title: Option<String>,
}

/// Parameters for adding a catalog spot to a plan's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartAdd {
    /// The plan whose cart to extend
    pub plan_id: u64,
    /// Catalog id of the spot to add
    pub spot_id: String,
}

/// Parameters for removing a cart entry by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRemove {
    /// The plan whose cart to shrink
    pub plan_id: u64,
    /// 0-based cart position to remove
    pub index: usize,
}

/// Parameters for confirming a plan's flights, triggering timetable
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFlights {
    /// The plan to generate a timetable for
    pub plan_id: u64,
    /// Inbound and outbound legs
    pub flights: FlightPair,
}

/// Parameters for placing a cart spot into a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSpot {
    /// The plan being edited
    pub plan_id: u64,
    /// 0-based position of the spot within the cart
    pub cart_index: usize,
    /// Destination slot
    pub slot: SlotAddress,
    /// Insertion position within the slot's activity list
    pub position: usize,
}

/// Parameters for moving an already-placed activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveActivity {
    /// The plan being edited
    pub plan_id: u64,
    /// Source slot
    pub from_slot: SlotAddress,
    /// 0-based activity position within the source slot
    pub from_position: usize,
    /// Destination slot
    pub to_slot: SlotAddress,
    /// Insertion position within the destination slot
    pub to_position: usize,
}

/// Parameters for editing fields of one placed activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditActivity {
    /// The plan being edited
    pub plan_id: u64,
    /// Slot holding the activity
    pub slot: SlotAddress,
    /// 0-based activity position within the slot
    pub position: usize,
    /// Fields to merge into the activity
    pub patch: ActivityPatch,
}

/// Parameters for appending a session to one day's flex period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSession {
    /// The plan being edited
    pub plan_id: u64,
    /// 0-based day index
    pub day: usize,
    /// Which extensible period to grow
    pub period: FlexPeriod,
}
