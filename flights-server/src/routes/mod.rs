//! Route network: graph storage, Route Source client, and the shared
//! refreshable snapshot.
//!
//! The full airport-pair listing is fetched once at startup and
//! refreshed periodically; request handling only ever reads snapshots.

mod client;
mod error;
mod graph;
mod network;

pub use client::{RouteDto, RoutesClient, RoutesClientConfig};
pub use error::RouteError;
pub use graph::RouteGraph;
pub use network::RouteNetwork;
