//! In-place activity edits and session additions.

use super::{EditOutcome, Scheduler, TimetableSink};
use crate::address::SlotAddress;
use crate::error::Result;
use crate::models::{ActivityPatch, FlexPeriod};

impl<S: TimetableSink> Scheduler<S> {
    /// Merges a partial field update into the activity at `index` within the
    /// addressed slot, preserving its id, untouched fields, and position.
    ///
    /// An address or position that does not resolve is silently ignored; the
    /// timetable is left unchanged and the sink is not invoked.
    pub fn edit_activity(
        &mut self,
        address: &SlotAddress,
        index: usize,
        patch: ActivityPatch,
    ) -> Result<EditOutcome> {
        let Some(current) = self.timetable() else {
            return Ok(EditOutcome::Ignored);
        };
        match current.with_activity_updated(address, index, patch) {
            Some(next) => {
                self.commit(next)?;
                Ok(EditOutcome::Applied)
            }
            None => Ok(EditOutcome::Ignored),
        }
    }

    /// Appends one fresh empty session to the given flex period of one day.
    ///
    /// Taking a [`FlexPeriod`] keeps "add a session to breakfast" illegal at
    /// the type level. A day index past the end of the trip is ignored.
    pub fn add_session(&mut self, day: usize, period: FlexPeriod) -> Result<EditOutcome> {
        let Some(current) = self.timetable() else {
            return Ok(EditOutcome::Ignored);
        };
        match current.with_session_added(day, period) {
            Some(next) => {
                self.commit(next)?;
                Ok(EditOutcome::Applied)
            }
            None => Ok(EditOutcome::Ignored),
        }
    }
}
