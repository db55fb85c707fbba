//! Day-plan generation from a flight pair.

use super::{Scheduler, TimetableSink};
use crate::error::{PlannerError, Result};
use crate::models::{DayPlan, FlightPair, Timetable};

impl<S: TimetableSink> Scheduler<S> {
    /// Builds and commits a fresh timetable spanning the arrival leg's
    /// arrival date through the departure leg's departure date, inclusive.
    ///
    /// Every day starts with six freshly generated empty sessions. This is a
    /// destructive regenerate: any previously placed activities are
    /// discarded, even if the new flights span the same dates.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidDateRange`] when the departure date
    /// precedes the arrival date, leaving the current timetable untouched.
    pub fn generate(&mut self, flights: FlightPair) -> Result<&Timetable> {
        let start = flights.arrival.arrival_time.date();
        let end = flights.departure.departure_time.date();
        if end < start {
            return Err(PlannerError::InvalidDateRange {
                arrival: start,
                departure: end,
            });
        }

        let mut days = Vec::new();
        let mut date = start;
        loop {
            days.push(DayPlan::empty(date));
            if date == end {
                break;
            }
            date = date.tomorrow().map_err(|e| PlannerError::Configuration {
                message: format!("Cannot advance past {date}: {e}"),
            })?;
        }

        self.commit(Timetable { flights, days })
    }
}
