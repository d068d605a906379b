//! Route graph and bounded path enumeration.
//!
//! Stores the directed network of directly-served airport pairs and
//! answers "every simple path from A to B with at most N intermediate
//! stops" queries. The domain needs *all* qualifying routes rather than
//! the cheapest one, so this is an exhaustive depth-first enumeration
//! bounded by hop count, not a shortest-path search.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::domain::{FlightPath, Iata};

/// Directed graph of direct airport-to-airport services.
///
/// Adding an edge implicitly adds both endpoint vertices; duplicate
/// edges are idempotent. Adjacency is kept in ordered sets so that path
/// enumeration order is deterministic for a fixed graph.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: BTreeMap<Iata, BTreeSet<Iata>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a direct service between two airports.
    ///
    /// Both endpoints become vertices if they were not already present.
    pub fn add_edge(&mut self, origin: Iata, destination: Iata) {
        self.adjacency.entry(origin).or_default().insert(destination);
        self.adjacency.entry(destination).or_default();
    }

    /// Number of airports in the graph.
    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Every simple path from `origin` to `destination` with at most
    /// `max_intermediate_stops` intermediate airports.
    ///
    /// Returns an empty list (never an error) when the origin equals the
    /// destination, when either airport is absent from the graph, or
    /// when no qualifying path exists. Ordering is unspecified but
    /// deterministic for a fixed graph and bound.
    pub fn find_paths(
        &self,
        origin: Iata,
        destination: Iata,
        max_intermediate_stops: usize,
    ) -> Vec<FlightPath> {
        if origin == destination {
            return Vec::new();
        }
        if !self.adjacency.contains_key(&origin) || !self.adjacency.contains_key(&destination) {
            return Vec::new();
        }

        // At most max_intermediate_stops + 1 edges per path.
        let max_edges = max_intermediate_stops + 1;

        let mut paths = Vec::new();
        let mut current = vec![origin];
        let mut visited: HashSet<Iata> = HashSet::new();
        visited.insert(origin);

        self.dfs(
            origin,
            destination,
            max_edges,
            &mut current,
            &mut visited,
            &mut paths,
        );

        paths
    }

    fn dfs(
        &self,
        node: Iata,
        destination: Iata,
        remaining_edges: usize,
        current: &mut Vec<Iata>,
        visited: &mut HashSet<Iata>,
        paths: &mut Vec<FlightPath>,
    ) {
        if remaining_edges == 0 {
            return;
        }

        let Some(neighbours) = self.adjacency.get(&node) else {
            return;
        };

        for &next in neighbours {
            if next == destination {
                let mut airports = current.clone();
                airports.push(destination);
                paths.push(FlightPath::new(airports));
                continue;
            }

            if !visited.insert(next) {
                continue;
            }
            current.push(next);

            self.dfs(next, destination, remaining_edges - 1, current, visited, paths);

            current.pop();
            visited.remove(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn graph(edges: &[(&str, &str)]) -> RouteGraph {
        let mut g = RouteGraph::new();
        for (from, to) in edges {
            g.add_edge(iata(from), iata(to));
        }
        g
    }

    fn path_strings(paths: &[FlightPath]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn direct_path_found() {
        let g = graph(&[("DUB", "WRO")]);
        let paths = g.find_paths(iata("DUB"), iata("WRO"), 1);

        assert_eq!(path_strings(&paths), vec!["DUB -> WRO"]);
    }

    #[test]
    fn direct_and_one_stop_both_found() {
        let g = graph(&[("DUB", "WRO"), ("DUB", "STN"), ("STN", "WRO")]);
        let mut names = path_strings(&g.find_paths(iata("DUB"), iata("WRO"), 1));
        names.sort();

        assert_eq!(names, vec!["DUB -> STN -> WRO", "DUB -> WRO"]);
    }

    #[test]
    fn adding_edge_twice_is_idempotent() {
        let once = graph(&[("DUB", "STN"), ("STN", "WRO")]);
        let mut twice = once.clone();
        twice.add_edge(iata("DUB"), iata("STN"));
        twice.add_edge(iata("DUB"), iata("STN"));

        assert_eq!(
            path_strings(&once.find_paths(iata("DUB"), iata("WRO"), 1)),
            path_strings(&twice.find_paths(iata("DUB"), iata("WRO"), 1)),
        );
    }

    #[test]
    fn edges_are_directed() {
        let g = graph(&[("DUB", "WRO")]);
        assert!(g.find_paths(iata("WRO"), iata("DUB"), 1).is_empty());
    }

    #[test]
    fn same_origin_and_destination_is_empty() {
        let g = graph(&[("DUB", "WRO")]);
        assert!(g.find_paths(iata("DUB"), iata("DUB"), 1).is_empty());
    }

    #[test]
    fn unknown_airports_are_empty_not_error() {
        let g = graph(&[("DUB", "WRO")]);
        assert!(g.find_paths(iata("AAA"), iata("WRO"), 1).is_empty());
        assert!(g.find_paths(iata("DUB"), iata("AAA"), 1).is_empty());
    }

    #[test]
    fn destination_only_vertex_is_known() {
        // WRO only ever appears as a target; it must still count as present.
        let g = graph(&[("DUB", "WRO")]);
        assert_eq!(g.airport_count(), 2);
        assert_eq!(g.find_paths(iata("DUB"), iata("WRO"), 0).len(), 1);
    }

    #[test]
    fn bound_excludes_longer_routes() {
        // Only route from AAA to DDD needs two intermediate airports.
        let g = graph(&[("AAA", "BBB"), ("BBB", "CCC"), ("CCC", "DDD")]);

        assert!(g.find_paths(iata("AAA"), iata("DDD"), 1).is_empty());
        assert_eq!(
            path_strings(&g.find_paths(iata("AAA"), iata("DDD"), 2)),
            vec!["AAA -> BBB -> CCC -> DDD"]
        );
    }

    #[test]
    fn zero_intermediate_stops_means_direct_only() {
        let g = graph(&[("DUB", "WRO"), ("DUB", "STN"), ("STN", "WRO")]);
        assert_eq!(
            path_strings(&g.find_paths(iata("DUB"), iata("WRO"), 0)),
            vec!["DUB -> WRO"]
        );
    }

    #[test]
    fn cycles_do_not_loop_forever() {
        let g = graph(&[("AAA", "BBB"), ("BBB", "AAA"), ("BBB", "CCC")]);
        let paths = g.find_paths(iata("AAA"), iata("CCC"), 3);

        assert_eq!(path_strings(&paths), vec!["AAA -> BBB -> CCC"]);
    }

    #[test]
    fn enumeration_is_deterministic() {
        let g = graph(&[
            ("DUB", "WRO"),
            ("DUB", "STN"),
            ("STN", "WRO"),
            ("DUB", "CHQ"),
            ("CHQ", "WRO"),
        ]);

        let first = path_strings(&g.find_paths(iata("DUB"), iata("WRO"), 1));
        let second = path_strings(&g.find_paths(iata("DUB"), iata("WRO"), 1));
        assert_eq!(first, second);
    }
}
