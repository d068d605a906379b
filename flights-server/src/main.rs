use std::net::SocketAddr;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flights_server::planner::SearchConfig;
use flights_server::routes::{RouteNetwork, RoutesClient, RoutesClientConfig};
use flights_server::schedules::{SchedulesClient, SchedulesClientConfig};
use flights_server::web::{AppState, create_router};

/// How often to refresh the route network (24 hours).
const ROUTE_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Endpoint overrides from environment
    let mut routes_config = RoutesClientConfig::new();
    if let Ok(url) = std::env::var("ROUTES_ENDPOINT_URL") {
        routes_config = routes_config.with_base_url(url);
    }
    let mut schedules_config = SchedulesClientConfig::new();
    if let Ok(url) = std::env::var("SCHEDULES_ENDPOINT_URL") {
        schedules_config = schedules_config.with_base_url(url);
    }

    let routes_client = RoutesClient::new(routes_config).expect("Failed to create routes client");
    let schedules_client =
        SchedulesClient::new(schedules_config).expect("Failed to create schedules client");

    // Build the route network (fail fast if the Route Source is down:
    // the engine cannot answer anything without a graph)
    info!("Fetching route network...");
    let network = RouteNetwork::fetch(routes_client)
        .await
        .expect("Failed to fetch route network");
    info!("Loaded route network with {} airports", network.airport_count().await);

    // Spawn background task to refresh the network daily
    let network_refresh = network.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROUTE_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match network_refresh.refresh().await {
                Ok(count) => info!("Refreshed route network: {} airports", count),
                Err(e) => error!("Failed to refresh route network: {}", e),
            }
        }
    });

    // Build app state
    let state = AppState::new(schedules_client, network, SearchConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    info!("Flight interconnections server listening on http://{addr}");
    info!("  GET /health            - Health check");
    info!("  GET /interconnections  - Discover connections");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
