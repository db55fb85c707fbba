//! Drop-event resolution: cart placements and schedule moves.

use super::{DropOutcome, Scheduler, TimetableSink};
use crate::address::{DragSource, DropEvent};
use crate::catalog;
use crate::error::Result;
use crate::models::{ActivityItem, TravelSpot};

impl<S: TimetableSink> Scheduler<S> {
    /// Resolves one completed drag-and-drop gesture against the current
    /// timetable and cart.
    ///
    /// A cart source places a freshly synthesized activity (new id, title
    /// from the spot, location derived from the spot's city) at the
    /// destination position. A slot source moves the existing activity,
    /// preserving its identity, with remove-then-insert semantics: the
    /// destination index is interpreted after the removal, the way
    /// drag-and-drop layers report it.
    ///
    /// Events with no destination, a missing cart entry, or an address that
    /// does not resolve are no-ops: the prior committed timetable stays in
    /// place and [`DropOutcome::Ignored`] is returned. The sink is only
    /// invoked when a mutation actually happens.
    pub fn resolve_drop(&mut self, event: &DropEvent, cart: &[TravelSpot]) -> Result<DropOutcome> {
        let Some(destination) = event.destination else {
            return Ok(DropOutcome::Ignored);
        };
        let Some(current) = self.timetable() else {
            return Ok(DropOutcome::Ignored);
        };

        match &event.source {
            DragSource::Cart { index } => {
                let Some(spot) = cart.get(*index) else {
                    return Ok(DropOutcome::Ignored);
                };
                let item = ActivityItem::from_spot(spot, catalog::city_label(&spot.city_id));
                match current.with_activity_inserted(&destination.address, destination.index, item)
                {
                    Some(next) => {
                        self.commit(next)?;
                        Ok(DropOutcome::Placed)
                    }
                    None => Ok(DropOutcome::Ignored),
                }
            }
            DragSource::Slot { address, index } => {
                let Some((trimmed, item)) = current.with_activity_removed(address, *index) else {
                    return Ok(DropOutcome::Ignored);
                };
                match trimmed.with_activity_inserted(&destination.address, destination.index, item)
                {
                    Some(next) => {
                        self.commit(next)?;
                        Ok(DropOutcome::Moved)
                    }
                    None => Ok(DropOutcome::Ignored),
                }
            }
        }
    }
}
