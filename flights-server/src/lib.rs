//! Flight interconnections server.
//!
//! A web service that answers: "which flights, direct or with one
//! intermediate stop, get me from this airport to that one inside
//! this time window?"

pub mod domain;
pub mod planner;
pub mod routes;
pub mod schedules;
pub mod web;
