//! Slot addressing and drop events.
//!
//! A slot is addressed by the triple (day index, period, session index). The
//! drag-and-drop transport layer only speaks composite string tokens of the
//! form `"{day}-{period}-{session}"`, e.g. `"0-morning-1"` or
//! `"2-breakfast-0"`; this module converts losslessly between the token and
//! the typed [`SlotAddress`]. The `-` separator is safe because period names
//! never contain it.
//!
//! Parsing only validates the token's shape. Whether the day or session index
//! actually exists is checked at resolution time against a concrete
//! timetable, because drop events can race against a freshly regenerated
//! timetable; a stale-but-well-formed address must decode fine and then
//! resolve to nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Period;

/// Container token the transport layer uses for the cart.
pub const CART_CONTAINER: &str = "cart";

/// Errors produced when decoding a slot-address token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Token does not have the `day-period-session` shape
    #[error("malformed slot token '{token}'")]
    Malformed { token: String },
    /// Period segment is not one of the six period names
    #[error("unknown period '{period}' in slot token")]
    UnknownPeriod { period: String },
    /// Day or session segment is not a number
    #[error("non-numeric index in slot token '{token}'")]
    InvalidIndex { token: String },
}

/// Typed address of one slot: (day index, period, session index).
///
/// For meal periods the session index is always 0 and structurally ignored;
/// for flex periods it selects within the period's session sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAddress {
    /// 0-based position within the timetable's day sequence
    pub day: usize,

    /// Which of the six periods
    pub period: Period,

    /// 0-based position within a flex period's session sequence
    pub session: usize,
}

impl SlotAddress {
    /// Creates a slot address.
    pub fn new(day: usize, period: impl Into<Period>, session: usize) -> Self {
        Self {
            day,
            period: period.into(),
            session,
        }
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.day, self.period.as_str(), self.session)
    }
}

impl FromStr for SlotAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AddressError::Malformed {
            token: s.to_string(),
        };

        let mut parts = s.split('-');
        let day_part = parts.next().ok_or_else(malformed)?;
        let period_part = parts.next().ok_or_else(malformed)?;
        let session_part = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let period = period_part
            .parse::<Period>()
            .map_err(|_| AddressError::UnknownPeriod {
                period: period_part.to_string(),
            })?;

        let parse_index = |part: &str| {
            part.parse::<usize>().map_err(|_| AddressError::InvalidIndex {
                token: s.to_string(),
            })
        };

        Ok(SlotAddress {
            day: parse_index(day_part)?,
            period,
            session: parse_index(session_part)?,
        })
    }
}

/// Where a drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// From the cart, at the given cart position
    Cart { index: usize },

    /// From an already-scheduled slot, at the given activity position
    Slot { address: SlotAddress, index: usize },
}

impl DragSource {
    /// Decodes a transport container token plus position into a source.
    pub fn from_token(container: &str, index: usize) -> Result<Self, AddressError> {
        if container == CART_CONTAINER {
            Ok(DragSource::Cart { index })
        } else {
            let address = container.parse()?;
            Ok(DragSource::Slot { address, index })
        }
    }
}

/// Where a drag ended: a slot plus an insertion position within its
/// activity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    /// Destination slot
    pub address: SlotAddress,

    /// Insertion position within the slot's activity list
    pub index: usize,
}

/// A completed drag-and-drop gesture.
///
/// `destination` is `None` when the item was dropped outside any valid
/// target; resolving such an event is a normal no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    /// Where the drag started
    pub source: DragSource,

    /// Where the drag ended, if anywhere
    pub destination: Option<DropTarget>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlexPeriod, MealPeriod};

    #[test]
    fn test_token_round_trip_all_periods() {
        for period in Period::all() {
            let address = SlotAddress::new(3, period, 1);
            let token = address.to_string();
            assert_eq!(token.parse::<SlotAddress>().unwrap(), address);
        }
    }

    #[test]
    fn test_parse_flex_token() {
        let address: SlotAddress = "0-morning-1".parse().unwrap();
        assert_eq!(address.day, 0);
        assert_eq!(address.period, Period::Flex(FlexPeriod::Morning));
        assert_eq!(address.session, 1);
    }

    #[test]
    fn test_parse_meal_token() {
        let address: SlotAddress = "2-breakfast-0".parse().unwrap();
        assert_eq!(address.day, 2);
        assert_eq!(address.period, Period::Meal(MealPeriod::Breakfast));
        assert_eq!(address.session, 0);
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        assert!(matches!(
            "0-morning".parse::<SlotAddress>(),
            Err(AddressError::Malformed { .. })
        ));
        assert!(matches!(
            "0-morning-1-2".parse::<SlotAddress>(),
            Err(AddressError::Malformed { .. })
        ));
        assert!(matches!(
            "0-brunch-0".parse::<SlotAddress>(),
            Err(AddressError::UnknownPeriod { .. })
        ));
        assert!(matches!(
            "x-morning-0".parse::<SlotAddress>(),
            Err(AddressError::InvalidIndex { .. })
        ));
        assert!(matches!(
            "0-morning-x".parse::<SlotAddress>(),
            Err(AddressError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_drag_source_tokens() {
        assert_eq!(
            DragSource::from_token("cart", 2).unwrap(),
            DragSource::Cart { index: 2 }
        );
        assert_eq!(
            DragSource::from_token("1-night-0", 0).unwrap(),
            DragSource::Slot {
                address: SlotAddress::new(1, FlexPeriod::Night, 0),
                index: 0
            }
        );
        assert!(DragSource::from_token("nowhere", 0).is_err());
    }
}
