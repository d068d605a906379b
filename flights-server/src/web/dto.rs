//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Leg};

/// Query parameters for the interconnections endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterconnectionsRequest {
    /// Origin airport IATA code
    pub departure: String,

    /// Destination airport IATA code
    pub arrival: String,

    /// Earliest departure, ISO-8601 local datetime
    pub departure_date_time: String,

    /// Latest arrival, ISO-8601 local datetime
    pub arrival_date_time: String,
}

/// A connection in the response.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    /// Number of intermediate stops (0 = direct)
    pub stops: usize,

    /// The legs of the itinerary, in travel order
    pub legs: Vec<LegResult>,
}

impl ConnectionResult {
    /// Build the response shape from a domain connection.
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            stops: connection.stops(),
            legs: connection.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// One leg of a connection in the response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// Departure airport IATA code
    pub departure_airport: String,

    /// Arrival airport IATA code
    pub arrival_airport: String,

    /// Absolute departure timestamp
    pub departure_date_time: String,

    /// Absolute arrival timestamp
    pub arrival_date_time: String,
}

impl LegResult {
    /// Build the response shape from a domain leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            departure_airport: leg.departure_airport.to_string(),
            arrival_airport: leg.arrival_airport.to_string(),
            departure_date_time: format_datetime(&leg.departure_time),
            arrival_date_time: format_datetime(&leg.arrival_time),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Format a datetime the way the wire expects it (minute precision).
fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse an ISO-8601 local datetime, with or without seconds.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("invalid datetime: {s:?}"))
}
