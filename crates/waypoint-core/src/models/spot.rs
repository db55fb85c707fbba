//! City and travel spot reference data models.
//!
//! Both types are immutable reference data: the scheduling engine only ever
//! reads them, it never mutates or owns them beyond cloning a spot into a
//! placed activity's reference field.

use serde::{Deserialize, Serialize};

/// A destination city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    /// Stable identifier, e.g. "new-york"
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Latitude/longitude pair
    pub position: (f64, f64),

    /// Country the city belongs to
    pub country: String,
}

/// A point of interest that can be added to a plan's cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelSpot {
    /// Stable identifier, e.g. "tower-of-london"
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Latitude/longitude pair
    pub position: (f64, f64),

    /// Identifier of the city this spot belongs to
    pub city_id: String,

    /// Short description shown in spot listings
    pub description: String,

    /// URL of a representative image
    pub image_url: String,
}
