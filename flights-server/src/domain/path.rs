//! Flight paths and hops.
//!
//! A `FlightPath` is the shape of an itinerary (an ordered sequence of
//! airports) independent of any actual flight times. It converts to a
//! sequence of `Hop`s, the airport pairs that schedules are fetched for.

use std::fmt;

use super::Iata;

/// One edge-traversal step between two airports in a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    /// Departure airport of this step.
    pub origin: Iata,
    /// Arrival airport of this step.
    pub destination: Iata,
}

impl Hop {
    /// Create a hop between two airports.
    pub fn new(origin: Iata, destination: Iata) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// An ordered, non-empty sequence of distinct airports from an origin
/// to a destination.
///
/// Produced by [`RouteGraph::find_paths`](crate::routes::RouteGraph::find_paths);
/// the graph guarantees simplicity (no repeated airport), so this type
/// does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPath {
    airports: Vec<Iata>,
}

impl FlightPath {
    /// Create a path from an ordered list of airports.
    pub fn new(airports: Vec<Iata>) -> Self {
        Self { airports }
    }

    /// Returns the airports in visiting order.
    pub fn airports(&self) -> &[Iata] {
        &self.airports
    }

    /// Number of airports on the path.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// True when the path has no airports.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Number of intermediate stops (airports excluding both endpoints).
    pub fn intermediate_stops(&self) -> usize {
        self.airports.len().saturating_sub(2)
    }

    /// Convert the path to its sequence of hops.
    ///
    /// A path of N airports yields N-1 hops; a path with fewer than two
    /// airports yields none.
    pub fn to_hops(&self) -> Vec<Hop> {
        self.airports
            .windows(2)
            .map(|pair| Hop::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for FlightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, airport) in self.airports.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{airport}")?;
        }
        Ok(())
    }
}
