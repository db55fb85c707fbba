//! Flight models defining the itinerary's date span.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// A single flight leg.
///
/// Times are wall-clock local times; the scheduling engine only ever reads
/// their date components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightDetails {
    /// Carrier flight number, e.g. "BA 5"
    pub flight_number: String,

    /// IATA code of the departure airport
    pub departure_airport: String,

    /// IATA code of the arrival airport
    pub arrival_airport: String,

    /// Scheduled departure time (local)
    pub departure_time: DateTime,

    /// Scheduled arrival time (local)
    pub arrival_time: DateTime,
}

/// The inbound and outbound legs of a trip.
///
/// The arrival leg's arrival date and the departure leg's departure date are
/// the sole determinant of the itinerary's calendar span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightPair {
    /// Leg that brings the traveller to the destination
    pub arrival: FlightDetails,

    /// Leg that takes the traveller home
    pub departure: FlightDetails,
}
