//! Web layer for the flight interconnections server.
//!
//! Provides the HTTP endpoint for discovering connections.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
