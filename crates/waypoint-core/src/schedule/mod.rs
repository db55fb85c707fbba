//! The itinerary scheduling engine.
//!
//! This module owns the one piece of real state in the system: the current
//! [`Timetable`] of the plan being edited. The [`Scheduler`] orchestrates the
//! engine's operations and funnels every mutation through a single commit
//! path:
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌────────────────┐
//! │  Operations  │    │   Scheduler   │    │ TimetableSink  │
//! │ (generator,  │───▶│  commit path  │───▶│ (plan store    │
//! │  placement,  │    │ (local state) │    │  callback)     │
//! │  mutate)     │    └───────────────┘    └────────────────┘
//! └──────────────┘
//! ```
//!
//! Each operation derives a brand-new timetable value from the previous one
//! ([`ops`]), then `commit` forwards it to the sink and replaces local state.
//! If the sink fails, local state stays at the previous committed value, so
//! callers never observe the two sides disagreeing. Everything is
//! synchronous and runs to completion; there is no suspension point inside a
//! mutation.
//!
//! ## Submodules
//!
//! - [`generator`]: builds the day sequence from a flight pair
//! - [`placement`]: resolves drag-and-drop events
//! - [`mutate`]: in-place activity edits and add-session
//! - [`ops`]: the underlying pure timetable transformations

use crate::error::Result;
use crate::models::Timetable;

pub mod generator;
pub mod mutate;
pub mod ops;
pub mod placement;

#[cfg(test)]
mod tests;

/// Receiver for every committed timetable value.
///
/// In production this is the plan store writing the new snapshot; tests use a
/// closure. The forwarded value is a snapshot, not a live alias: the
/// scheduler keeps exclusive ownership of its own copy.
pub trait TimetableSink {
    /// Called synchronously with each newly committed timetable.
    fn timetable_changed(&mut self, timetable: &Timetable) -> Result<()>;
}

impl<F> TimetableSink for F
where
    F: FnMut(&Timetable) -> Result<()>,
{
    fn timetable_changed(&mut self, timetable: &Timetable) -> Result<()> {
        self(timetable)
    }
}

/// What a drop event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A cart spot was placed as a new activity
    Placed,
    /// An already-placed activity moved to a new position
    Moved,
    /// The event did not resolve; the timetable is unchanged
    Ignored,
}

/// What an edit or add-session request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The change was applied and committed
    Applied,
    /// The address did not resolve; the timetable is unchanged
    Ignored,
}

/// Holds the current timetable for one plan-editing session and applies all
/// mutations to it.
///
/// One scheduler exists per editing session and is the only component allowed
/// to replace the timetable; everything else sees read snapshots.
pub struct Scheduler<S: TimetableSink> {
    timetable: Option<Timetable>,
    sink: S,
}

impl<S: TimetableSink> Scheduler<S> {
    /// Creates a scheduler seeded with a plan's stored timetable, if any.
    pub fn new(initial: Option<Timetable>, sink: S) -> Self {
        Self {
            timetable: initial,
            sink,
        }
    }

    /// Read access to the current committed timetable.
    pub fn timetable(&self) -> Option<&Timetable> {
        self.timetable.as_ref()
    }

    /// Re-seeds local state when the externally supplied timetable changes,
    /// e.g. when the user switches which plan is being edited.
    pub fn sync(&mut self, timetable: Option<Timetable>) {
        self.timetable = timetable;
    }

    /// Consumes the scheduler, yielding the final timetable.
    pub fn into_timetable(self) -> Option<Timetable> {
        self.timetable
    }

    /// The single commit path: forward to the sink, then replace local state.
    ///
    /// A sink failure leaves local state at the previous committed value, so
    /// the caller-visible state and the stored snapshot never disagree.
    pub(crate) fn commit(&mut self, next: Timetable) -> Result<&Timetable> {
        self.sink.timetable_changed(&next)?;
        Ok(self.timetable.insert(next))
    }
}
