//! Flight connection type.

use super::Leg;

/// A deliverable itinerary: one or two legs chained together.
///
/// The stop count is derived from the leg count (legs - 1). For a
/// one-stop connection the analyzer guarantees the minimum connection
/// buffer between the first leg's arrival and the second leg's
/// departure; this type records the result, it does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    legs: Vec<Leg>,
}

impl Connection {
    /// Create a zero-stop connection from a single leg.
    pub fn direct(leg: Leg) -> Self {
        Self { legs: vec![leg] }
    }

    /// Create a one-stop connection from two legs.
    pub fn one_stop(first: Leg, second: Leg) -> Self {
        Self {
            legs: vec![first, second],
        }
    }

    /// The legs of this connection, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of intermediate stops (legs - 1).
    pub fn stops(&self) -> usize {
        self.legs.len() - 1
    }
}
