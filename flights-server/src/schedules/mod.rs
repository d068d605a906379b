//! Schedule Source client.
//!
//! This module provides an HTTP client for the flight schedule API,
//! which returns one month of per-day flight listings per request.
//!
//! Key characteristics of the schedule API:
//! - Requests are per (origin, destination, year, month)
//! - Times are local "HH:MM" strings; the response carries the month
//!   but not the year, which the caller must supply
//! - Months without published schedules return 404

mod client;
mod error;
mod mock;
mod types;

pub use client::{SchedulesClient, SchedulesClientConfig};
pub use error::ScheduleError;
pub use mock::MockScheduleSource;
pub use types::{FlightTimes, FlightsDay, Schedule};
