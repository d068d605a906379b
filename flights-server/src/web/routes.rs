//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{error, info};

use crate::domain::Iata;
use crate::planner::FlightPlanner;

use super::dto::{ConnectionResult, ErrorResponse, InterconnectionsRequest, parse_datetime};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/interconnections", get(interconnections))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List flights, direct or with one intermediate stop, departing from
/// the given airport not earlier than `departureDateTime` and arriving
/// at the destination not later than `arrivalDateTime`.
async fn interconnections(
    State(state): State<AppState>,
    Query(req): Query<InterconnectionsRequest>,
) -> Result<Json<Vec<ConnectionResult>>, AppError> {
    let departure = Iata::parse_normalized(&req.departure).map_err(|_| AppError::BadRequest {
        message: format!("Invalid departure airport: {}", req.departure),
    })?;
    let arrival = Iata::parse_normalized(&req.arrival).map_err(|_| AppError::BadRequest {
        message: format!("Invalid arrival airport: {}", req.arrival),
    })?;

    let departure_date_time =
        parse_datetime(&req.departure_date_time).map_err(|e| AppError::BadRequest {
            message: format!("Invalid departureDateTime: {e}"),
        })?;
    let arrival_date_time =
        parse_datetime(&req.arrival_date_time).map_err(|e| AppError::BadRequest {
            message: format!("Invalid arrivalDateTime: {e}"),
        })?;

    // The planner treats an inverted window as empty; reject it here
    // so callers learn about the mistake instead of getting []
    if arrival_date_time < departure_date_time {
        return Err(AppError::BadRequest {
            message: "arrivalDateTime must not precede departureDateTime".to_string(),
        });
    }

    info!(
        %departure,
        %arrival,
        %departure_date_time,
        %arrival_date_time,
        "interconnections request"
    );

    let graph = state.network.snapshot().await;
    let planner = FlightPlanner::new(&graph, state.schedules.as_ref(), &state.config);

    let result = planner
        .discover_connections(departure, arrival, departure_date_time, arrival_date_time)
        .await;

    info!(
        connections = result.connections.len(),
        routes = result.routes_analyzed,
        "interconnections response"
    );

    Ok(Json(
        result
            .connections
            .iter()
            .map(ConnectionResult::from_connection)
            .collect(),
    ))
}

/// Application error type.
///
/// Request handling has no internal failure path: upstream outages
/// degrade to partial or empty results inside the planner, so the only
/// error a handler can produce is a rejected request.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let AppError::BadRequest { message } = self;

        error!(%message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bad_request_renders_400_with_json_body() {
        let err = AppError::BadRequest {
            message: "Invalid departure airport: xx".to_string(),
        };

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid departure airport: xx");
    }
}
