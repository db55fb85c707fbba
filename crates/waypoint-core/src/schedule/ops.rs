//! Pure timetable transformations.
//!
//! Every operation takes the current [`Timetable`] by reference and returns a
//! freshly built value, leaving the input untouched. `None` means the address
//! or position did not resolve; by policy that is a no-op for the caller, not
//! an error, because addresses arrive from an event stream that can be stale
//! relative to a regenerated timetable.

use crate::address::SlotAddress;
use crate::models::{ActivityItem, ActivityPatch, FlexPeriod, Session, Timetable};

impl Timetable {
    /// Looks up the session a slot address points at.
    pub fn session_at(&self, address: &SlotAddress) -> Option<&Session> {
        self.days
            .get(address.day)?
            .session(address.period, address.session)
    }

    fn session_at_mut(&mut self, address: &SlotAddress) -> Option<&mut Session> {
        self.days
            .get_mut(address.day)?
            .session_mut(address.period, address.session)
    }

    /// Returns a new timetable with `item` inserted into the addressed
    /// session at `index`, shifting later activities right.
    ///
    /// An index past the end inserts at the end, matching how the
    /// drag-and-drop layer reports drops below the last card.
    pub fn with_activity_inserted(
        &self,
        address: &SlotAddress,
        index: usize,
        item: ActivityItem,
    ) -> Option<Timetable> {
        let mut next = self.clone();
        let session = next.session_at_mut(address)?;
        let index = index.min(session.activities.len());
        session.activities.insert(index, item);
        Some(next)
    }

    /// Returns a new timetable with the activity at `index` removed from the
    /// addressed session, alongside the removed item itself.
    pub fn with_activity_removed(
        &self,
        address: &SlotAddress,
        index: usize,
    ) -> Option<(Timetable, ActivityItem)> {
        let mut next = self.clone();
        let session = next.session_at_mut(address)?;
        if index >= session.activities.len() {
            return None;
        }
        let item = session.activities.remove(index);
        Some((next, item))
    }

    /// Returns a new timetable with `patch` merged into the activity at
    /// `index` in the addressed session. Identity and position are preserved.
    pub fn with_activity_updated(
        &self,
        address: &SlotAddress,
        index: usize,
        patch: ActivityPatch,
    ) -> Option<Timetable> {
        let mut next = self.clone();
        let session = next.session_at_mut(address)?;
        session.activities.get_mut(index)?.apply(patch);
        Some(next)
    }

    /// Returns a new timetable with one fresh empty session appended to the
    /// given flex period of day `day`. No other day, period, or session
    /// changes.
    pub fn with_session_added(&self, day: usize, period: FlexPeriod) -> Option<Timetable> {
        let mut next = self.clone();
        next.days
            .get_mut(day)?
            .flex_mut(period)
            .push(Session::empty(period));
        Some(next)
    }
}
