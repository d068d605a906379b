//! Domain types for the flight interconnections server.
//!
//! This module contains the core domain model types that represent
//! validated flight data. Airport codes are validated at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod connection;
mod leg;
mod path;

pub use airport::{Iata, InvalidIata};
pub use connection::Connection;
pub use leg::Leg;
pub use path::{FlightPath, Hop};
