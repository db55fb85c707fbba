//! Timetable model: the full scheduled itinerary.

use serde::{Deserialize, Serialize};

use super::{DayPlan, FlightPair};

/// The scheduled itinerary: a flight pair and one day plan per calendar day
/// from the arrival date through the departure date, in ascending order.
///
/// A timetable is only ever created by generation from a [`FlightPair`] and
/// only ever changed by operations that produce a new value; see
/// [`crate::schedule`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timetable {
    /// The flights that determined this timetable's date span
    pub flights: FlightPair,

    /// One plan per day, dated sequentially
    pub days: Vec<DayPlan>,
}

impl Timetable {
    /// Total number of placed activities across all days and sessions.
    pub fn activity_count(&self) -> usize {
        self.days
            .iter()
            .map(|day| {
                let meals = day.breakfast.activities.len()
                    + day.lunch.activities.len()
                    + day.dinner.activities.len();
                let flex: usize = [&day.morning, &day.afternoon, &day.night]
                    .into_iter()
                    .flatten()
                    .map(|session| session.activities.len())
                    .sum();
                meals + flex
            })
            .sum()
    }
}
