//! Connection discovery engine.
//!
//! This module implements the core that answers: "which flights,
//! direct or with one intermediate stop, connect these two airports
//! inside this time window?"
//!
//! Path enumeration over the route graph yields candidate routes; the
//! schedule window fetcher turns per-month listings into absolute
//! legs; the analyzer joins legs across at most one stop under the
//! minimum-connection-time rule.

mod analyzer;
mod config;
mod fetch;
mod search;

pub use analyzer::{ConnectionAnalyzer, MIN_CONNECTION_HOURS, min_connection};
pub use config::SearchConfig;
pub use fetch::{FlightFetcher, ScheduleSource};
pub use search::{DiscoveryResult, FlightPlanner};
