//! Connection assembly for routes with at most one intermediate stop.
//!
//! Consumes one route (a sequence of hops), fetches candidate legs per
//! hop, and joins them under the minimum-connection-time rule.

use chrono::Duration;

use crate::domain::{Connection, Hop};

use super::fetch::{FlightFetcher, ScheduleSource};

/// Minimum required hours between an arriving leg and the next
/// departing leg of a one-stop connection.
pub const MIN_CONNECTION_HOURS: i64 = 2;

/// The minimum connection buffer as a `Duration`.
pub fn min_connection() -> Duration {
    Duration::hours(MIN_CONNECTION_HOURS)
}

/// Assembles valid connections for a single route.
pub struct ConnectionAnalyzer<'a, S: ScheduleSource> {
    fetcher: FlightFetcher<'a, S>,
}

impl<'a, S: ScheduleSource> ConnectionAnalyzer<'a, S> {
    /// Create a new analyzer over the given schedule source.
    pub fn new(source: &'a S) -> Self {
        Self {
            fetcher: FlightFetcher::new(source),
        }
    }

    /// Valid connections for `route` within the given window.
    ///
    /// One hop yields zero-stop connections, two hops yield one-stop
    /// connections satisfying the minimum connection buffer. Routes
    /// with any other hop count are beyond this analyzer's designed
    /// ceiling and yield nothing.
    pub async fn find_valid_connections(
        &self,
        route: &[Hop],
        departure_window_start: chrono::NaiveDateTime,
        arrival_window_end: chrono::NaiveDateTime,
    ) -> Vec<Connection> {
        match route {
            [hop] => {
                self.direct_connections(*hop, departure_window_start, arrival_window_end)
                    .await
            }
            [first, second] => {
                self.one_stop_connections(
                    *first,
                    *second,
                    departure_window_start,
                    arrival_window_end,
                )
                .await
            }
            _ => Vec::new(),
        }
    }

    /// One zero-stop connection per scheduled leg on the hop.
    async fn direct_connections(
        &self,
        hop: Hop,
        window_start: chrono::NaiveDateTime,
        window_end: chrono::NaiveDateTime,
    ) -> Vec<Connection> {
        self.fetcher
            .get_flights(hop.origin, hop.destination, window_start, window_end)
            .await
            .into_iter()
            .map(Connection::direct)
            .collect()
    }

    /// Every (first-hop, second-hop) leg pair with enough connection time.
    async fn one_stop_connections(
        &self,
        first: Hop,
        second: Hop,
        window_start: chrono::NaiveDateTime,
        window_end: chrono::NaiveDateTime,
    ) -> Vec<Connection> {
        let initial_legs = self
            .fetcher
            .get_flights(first.origin, first.destination, window_start, window_end)
            .await;

        let Some(earliest_departure) = initial_legs.iter().map(|l| l.departure_time).min() else {
            return Vec::new();
        };

        // Coarse lower bound for the second-hop fetch, derived from the
        // earliest first-hop departure. Looser than any individual leg
        // needs, so no valid pairing is lost; the per-pair check below
        // is the authoritative rule.
        let next_min_departure = earliest_departure + min_connection();

        let final_legs = self
            .fetcher
            .get_flights(
                second.origin,
                second.destination,
                next_min_departure,
                window_end,
            )
            .await;

        let mut connections = Vec::new();
        for initial in &initial_legs {
            for final_leg in &final_legs {
                if initial.arrival_time + min_connection() <= final_leg.departure_time {
                    connections.push(Connection::one_stop(initial.clone(), final_leg.clone()));
                }
            }
        }
        connections
    }
}
