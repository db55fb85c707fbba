//! Day plan model: one calendar day's slot layout.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{FlexPeriod, MealPeriod, Period, Session};

/// One calendar day of the itinerary.
///
/// Every day carries exactly one session per meal period and a non-empty,
/// grow-only sequence of sessions per flex period. Meal sessions are never
/// added or removed; flex sequences are appended to only, never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Calendar date, no time component
    pub date: Date,

    /// Singleton breakfast slot
    pub breakfast: Session,

    /// Morning sessions, always at least one
    pub morning: Vec<Session>,

    /// Singleton lunch slot
    pub lunch: Session,

    /// Afternoon sessions, always at least one
    pub afternoon: Vec<Session>,

    /// Singleton dinner slot
    pub dinner: Session,

    /// Night sessions, always at least one
    pub night: Vec<Session>,
}

impl DayPlan {
    /// Creates an empty day: six freshly generated sessions, each with its
    /// own id.
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            breakfast: Session::empty(MealPeriod::Breakfast),
            morning: vec![Session::empty(FlexPeriod::Morning)],
            lunch: Session::empty(MealPeriod::Lunch),
            afternoon: vec![Session::empty(FlexPeriod::Afternoon)],
            dinner: Session::empty(MealPeriod::Dinner),
            night: vec![Session::empty(FlexPeriod::Night)],
        }
    }

    /// The single session of a meal period.
    pub fn meal(&self, period: MealPeriod) -> &Session {
        match period {
            MealPeriod::Breakfast => &self.breakfast,
            MealPeriod::Lunch => &self.lunch,
            MealPeriod::Dinner => &self.dinner,
        }
    }

    /// The session sequence of a flex period.
    pub fn flex(&self, period: FlexPeriod) -> &[Session] {
        match period {
            FlexPeriod::Morning => &self.morning,
            FlexPeriod::Afternoon => &self.afternoon,
            FlexPeriod::Night => &self.night,
        }
    }

    pub(crate) fn flex_mut(&mut self, period: FlexPeriod) -> &mut Vec<Session> {
        match period {
            FlexPeriod::Morning => &mut self.morning,
            FlexPeriod::Afternoon => &mut self.afternoon,
            FlexPeriod::Night => &mut self.night,
        }
    }

    /// Looks up a session by period and index.
    ///
    /// For meal periods the index is structurally ignored; for flex periods
    /// it selects within the period's sequence and may be out of range.
    pub fn session(&self, period: Period, index: usize) -> Option<&Session> {
        match period {
            Period::Meal(meal) => Some(self.meal(meal)),
            Period::Flex(flex) => self.flex(flex).get(index),
        }
    }

    pub(crate) fn session_mut(&mut self, period: Period, index: usize) -> Option<&mut Session> {
        match period {
            Period::Meal(MealPeriod::Breakfast) => Some(&mut self.breakfast),
            Period::Meal(MealPeriod::Lunch) => Some(&mut self.lunch),
            Period::Meal(MealPeriod::Dinner) => Some(&mut self.dinner),
            Period::Flex(flex) => self.flex_mut(flex).get_mut(index),
        }
    }
}
