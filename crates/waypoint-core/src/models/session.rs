//! Session model: one slot's ordered activity list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActivityItem, Period};

/// One slot within a day, holding an ordered sequence of activities.
///
/// Insertion order is meaningful: it is both the display order and the order
/// placements address by position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Unique identifier, generated when the session is created
    pub id: Uuid,

    /// Which period of the day this session belongs to
    pub kind: Period,

    /// Placed activities in display order
    #[serde(default)]
    pub activities: Vec<ActivityItem>,
}

impl Session {
    /// Creates a fresh empty session with its own id.
    pub fn empty(kind: impl Into<Period>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            activities: Vec::new(),
        }
    }
}
