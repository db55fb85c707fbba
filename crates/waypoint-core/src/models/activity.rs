//! Placed activity model and partial updates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TravelSpot;

/// An activity placed into a session slot.
///
/// Identity is the `id`, generated once on placement. The id survives every
/// later list operation (inserts shifting the item, moves between slots,
/// field edits); positional indexes are only ever a transport detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    /// Unique identifier, generated when the activity is placed
    pub id: Uuid,

    /// Display title, initially the originating spot's name
    pub title: String,

    /// Free-text location line, initially derived from the spot's city
    pub location: String,

    /// User-editable remarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Weak reference back to the originating spot, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot: Option<TravelSpot>,
}

impl ActivityItem {
    /// Synthesizes a fresh activity for a cart spot being dropped into a slot.
    pub fn from_spot(spot: &TravelSpot, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: spot.name.clone(),
            location: location.into(),
            remarks: None,
            spot: Some(spot.clone()),
        }
    }

    /// Merges a partial update into this activity, preserving its id and any
    /// field the patch leaves unset.
    pub fn apply(&mut self, patch: ActivityPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(remarks) = patch.remarks {
            self.remarks = Some(remarks);
        }
        if let Some(spot) = patch.spot {
            self.spot = Some(spot);
        }
    }
}

/// A partial field update for one placed activity.
///
/// Any subset of fields may be set; unset fields are left untouched by
/// [`ActivityItem::apply`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityPatch {
    /// New display title
    pub title: Option<String>,

    /// New location line
    pub location: Option<String>,

    /// New remarks text
    pub remarks: Option<String>,

    /// New spot reference
    pub spot: Option<TravelSpot>,
}
