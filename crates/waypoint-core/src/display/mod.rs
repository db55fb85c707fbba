//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! this module adds the wrapper types that need context the model alone does
//! not carry: collections with an empty-case message, catalog listings, and
//! operation confirmation lines. Everything formats as markdown for the CLI's
//! terminal renderer.

use std::fmt;

pub mod datetime;
pub mod models;

pub use datetime::LocalDateTime;

use crate::catalog;
use crate::models::{PlanSummary, TravelSpot};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Handles the empty collection gracefully so callers can print the result
/// unconditionally.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of catalog spots.
pub struct SpotListing(pub Vec<TravelSpot>);

impl fmt::Display for SpotListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No spots found.");
        }
        for spot in &self.0 {
            writeln!(
                f,
                "- **{}**: {} ({}) - {}",
                spot.id,
                spot.name,
                catalog::city_label(&spot.city_id),
                spot.description
            )?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
