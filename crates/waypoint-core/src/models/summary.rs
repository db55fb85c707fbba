//! Plan summary types for list display.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Summary information about a plan with itinerary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Title of the plan
    pub title: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of scheduled days, zero while no flights are set
    pub day_count: usize,
    /// Number of spots in the cart
    pub cart_size: usize,
    /// Number of placed activities across the whole timetable
    pub activity_count: usize,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let (day_count, activity_count) = match &plan.timetable {
            Some(timetable) => (timetable.days.len(), timetable.activity_count()),
            None => (0, 0),
        };

        Self {
            id: plan.id,
            title: plan.title.clone(),
            created_at: plan.created_at,
            day_count,
            cart_size: plan.cart.len(),
            activity_count,
        }
    }
}
