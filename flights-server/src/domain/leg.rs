//! Flight leg type.
//!
//! A `Leg` is one concrete scheduled flight occurrence: an airport pair
//! plus absolute departure and arrival timestamps.

use chrono::NaiveDateTime;

use super::Iata;

/// One scheduled flight occurrence.
///
/// Built by the schedule window fetcher from a per-day schedule record,
/// combining the record's day with the flight's local times. Departure
/// preceding arrival comes from the schedule data itself and is not
/// re-validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// Departure airport.
    pub departure_airport: Iata,
    /// Arrival airport.
    pub arrival_airport: Iata,
    /// Absolute departure timestamp.
    pub departure_time: NaiveDateTime,
    /// Absolute arrival timestamp.
    pub arrival_time: NaiveDateTime,
}

impl Leg {
    /// Create a leg.
    pub fn new(
        departure_airport: Iata,
        arrival_airport: Iata,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
    ) -> Self {
        Self {
            departure_airport,
            arrival_airport,
            departure_time,
            arrival_time,
        }
    }
}
