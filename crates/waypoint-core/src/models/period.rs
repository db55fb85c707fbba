//! Period enumerations for the per-day slot layout.
//!
//! Each day offers six named periods. The three meal periods hold exactly one
//! session and are never added to; the three flex periods hold an ordered,
//! grow-only sequence of sessions. Keeping the two families as separate enums
//! makes "add a session to breakfast" unrepresentable: the add-session
//! operation only accepts a [`FlexPeriod`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the singleton meal periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    /// First meal slot of the day
    Breakfast,

    /// Midday meal slot
    Lunch,

    /// Evening meal slot
    Dinner,
}

impl MealPeriod {
    /// Convert to the token used in slot addresses and stored JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        }
    }
}

impl FromStr for MealPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealPeriod::Breakfast),
            "lunch" => Ok(MealPeriod::Lunch),
            "dinner" => Ok(MealPeriod::Dinner),
            _ => Err(format!("Invalid meal period: {s}")),
        }
    }
}

/// Type-safe enumeration of the extensible activity periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlexPeriod {
    /// Between breakfast and lunch
    Morning,

    /// Between lunch and dinner
    Afternoon,

    /// After dinner
    Night,
}

impl FlexPeriod {
    /// Convert to the token used in slot addresses and stored JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexPeriod::Morning => "morning",
            FlexPeriod::Afternoon => "afternoon",
            FlexPeriod::Night => "night",
        }
    }
}

impl FromStr for FlexPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(FlexPeriod::Morning),
            "afternoon" => Ok(FlexPeriod::Afternoon),
            "night" => Ok(FlexPeriod::Night),
            _ => Err(format!("Invalid flex period: {s}")),
        }
    }
}

/// Any of the six periods of a day.
///
/// Serializes as the plain lowercase period name so the stored JSON matches
/// the slot-address tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Period {
    /// A singleton meal slot
    Meal(MealPeriod),

    /// An extensible activity slot
    Flex(FlexPeriod),
}

impl Period {
    /// Convert to the token used in slot addresses and stored JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Meal(meal) => meal.as_str(),
            Period::Flex(flex) => flex.as_str(),
        }
    }

    /// All six periods in display order.
    pub fn all() -> [Period; 6] {
        [
            Period::Meal(MealPeriod::Breakfast),
            Period::Flex(FlexPeriod::Morning),
            Period::Meal(MealPeriod::Lunch),
            Period::Flex(FlexPeriod::Afternoon),
            Period::Meal(MealPeriod::Dinner),
            Period::Flex(FlexPeriod::Night),
        ]
    }
}

impl From<MealPeriod> for Period {
    fn from(meal: MealPeriod) -> Self {
        Period::Meal(meal)
    }
}

impl From<FlexPeriod> for Period {
    fn from(flex: FlexPeriod) -> Self {
        Period::Flex(flex)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.as_str().to_string()
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(meal) = s.parse::<MealPeriod>() {
            return Ok(Period::Meal(meal));
        }
        if let Ok(flex) = s.parse::<FlexPeriod>() {
            return Ok(Period::Flex(flex));
        }
        Err(format!("Invalid period: {s}"))
    }
}
