//! Connection discovery.
//!
//! Composes the route graph's bounded path enumeration with per-route
//! connection analysis: candidate routes in, valid connections out.

use chrono::NaiveDateTime;
use futures::future::join_all;
use tracing::info;

use crate::domain::{Connection, Iata};
use crate::routes::RouteGraph;

use super::analyzer::ConnectionAnalyzer;
use super::config::SearchConfig;
use super::fetch::ScheduleSource;

/// Result of connection discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryResult {
    /// Valid connections, concatenated in route-enumeration order.
    pub connections: Vec<Connection>,

    /// Number of candidate routes analyzed.
    pub routes_analyzed: usize,
}

impl DiscoveryResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            connections: Vec::new(),
            routes_analyzed: 0,
        }
    }
}

/// Flight connection planner.
pub struct FlightPlanner<'a, S: ScheduleSource> {
    graph: &'a RouteGraph,
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: ScheduleSource> FlightPlanner<'a, S> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, source: &'a S, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            source,
            config,
        }
    }

    /// Discover every valid connection from `origin` to `destination`
    /// with departures and arrivals inside the given window.
    ///
    /// An inverted window (`arrival_window_end < departure_window_start`)
    /// is a caller precondition violation; the planner answers it with
    /// an empty result rather than an error, since nothing internal
    /// depends on the ordering. An empty result is also the answer when
    /// no route or no qualifying flights exist.
    pub async fn discover_connections(
        &self,
        origin: Iata,
        destination: Iata,
        departure_window_start: NaiveDateTime,
        arrival_window_end: NaiveDateTime,
    ) -> DiscoveryResult {
        if arrival_window_end < departure_window_start {
            return DiscoveryResult::empty();
        }

        let paths =
            self.graph
                .find_paths(origin, destination, self.config.max_intermediate_stops);

        info!(
            count = paths.len(),
            %origin,
            %destination,
            "found candidate routes"
        );

        let analyzer = ConnectionAnalyzer::new(self.source);

        // The per-route analyses touch disjoint upstream queries, so
        // they run concurrently; results are flattened in
        // route-enumeration order, never completion order.
        let per_route = join_all(paths.iter().map(|path| {
            let analyzer = &analyzer;
            async move {
                info!(route = %path, "analyzing route");
                analyzer
                    .find_valid_connections(
                        &path.to_hops(),
                        departure_window_start,
                        arrival_window_end,
                    )
                    .await
            }
        }))
        .await;

        DiscoveryResult {
            connections: per_route.into_iter().flatten().collect(),
            routes_analyzed: paths.len(),
        }
    }
}
