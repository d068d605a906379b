//! Shared route network snapshot.
//!
//! Holds the [`RouteGraph`] built from the full Route Source listing.
//! A refresh builds a complete replacement graph and swaps it in, so
//! concurrent readers never observe a half-built network.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Iata;

use super::client::{RouteDto, RoutesClient};
use super::error::RouteError;
use super::graph::RouteGraph;

/// Thread-safe route network with support for background refresh.
#[derive(Clone)]
pub struct RouteNetwork {
    inner: Arc<RwLock<Arc<RouteGraph>>>,
    client: RoutesClient,
}

impl RouteNetwork {
    /// Create a new RouteNetwork by fetching the full route listing.
    ///
    /// This will fail if the Route Source is unreachable; the engine
    /// cannot operate without a graph, so startup should surface this.
    pub async fn fetch(client: RoutesClient) -> Result<Self, RouteError> {
        let routes = client.fetch_all().await?;
        let graph = build_graph(routes);

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
            client,
        })
    }

    /// Create a RouteNetwork from an existing graph (for mock/test mode).
    pub fn from_graph(graph: RouteGraph, client: RoutesClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
            client,
        }
    }

    /// Get the current graph snapshot.
    ///
    /// The returned `Arc` keeps the snapshot alive for the duration of a
    /// request even if a refresh swaps in a replacement meanwhile.
    pub async fn snapshot(&self) -> Arc<RouteGraph> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Number of airports in the current snapshot.
    pub async fn airport_count(&self) -> usize {
        let guard = self.inner.read().await;
        guard.airport_count()
    }

    /// Refresh the network from the Route Source.
    ///
    /// On success, replaces the current snapshot wholesale. On failure,
    /// the existing snapshot is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, RouteError> {
        let routes = self.client.fetch_all().await?;
        let graph = build_graph(routes);
        let count = graph.airport_count();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(graph);

        Ok(count)
    }
}

/// Build a route graph from route DTOs.
fn build_graph(routes: Vec<RouteDto>) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for route in routes {
        // The listing occasionally carries non-IATA entries; skip them
        let (Ok(from), Ok(to)) = (
            Iata::parse_normalized(&route.airport_from),
            Iata::parse_normalized(&route.airport_to),
        ) else {
            continue;
        };
        graph.add_edge(from, to);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(from: &str, to: &str) -> RouteDto {
        RouteDto {
            airport_from: from.to_string(),
            airport_to: to.to_string(),
        }
    }

    #[test]
    fn build_graph_adds_all_pairs() {
        let graph = build_graph(vec![dto("DUB", "WRO"), dto("DUB", "STN"), dto("STN", "WRO")]);

        assert_eq!(graph.airport_count(), 3);
        let paths = graph.find_paths(
            Iata::parse("DUB").unwrap(),
            Iata::parse("WRO").unwrap(),
            1,
        );
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn build_graph_skips_invalid_codes() {
        let graph = build_graph(vec![
            dto("DUB", "WRO"),
            dto("not-a-code", "WRO"),
            dto("DUB", ""),
        ]);

        assert_eq!(graph.airport_count(), 2);
    }

    fn local_client() -> RoutesClient {
        // Never contacted by these tests
        let config = crate::routes::RoutesClientConfig::new().with_base_url("http://localhost:1");
        RoutesClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn from_graph_serves_the_canned_graph() {
        let graph = build_graph(vec![dto("DUB", "WRO"), dto("DUB", "STN")]);
        let network = RouteNetwork::from_graph(graph, local_client());

        assert_eq!(network.airport_count().await, 3);

        let snapshot = network.snapshot().await;
        let paths = snapshot.find_paths(
            Iata::parse("DUB").unwrap(),
            Iata::parse("WRO").unwrap(),
            1,
        );
        assert_eq!(paths.len(), 1);
    }

    #[tokio::test]
    async fn clones_share_one_snapshot() {
        let graph = build_graph(vec![dto("DUB", "WRO")]);
        let network = RouteNetwork::from_graph(graph, local_client());
        let clone = network.clone();

        let a = network.snapshot().await;
        let b = clone.snapshot().await;
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn build_graph_normalizes_case() {
        let graph = build_graph(vec![dto("dub", "wro")]);

        assert_eq!(
            graph
                .find_paths(Iata::parse("DUB").unwrap(), Iata::parse("WRO").unwrap(), 0)
                .len(),
            1
        );
    }
}
