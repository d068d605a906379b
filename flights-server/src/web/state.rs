//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::SearchConfig;
use crate::routes::RouteNetwork;
use crate::schedules::SchedulesClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Schedule Source client
    pub schedules: Arc<SchedulesClient>,

    /// Route network snapshot holder
    pub network: RouteNetwork,

    /// Connection discovery configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedules: SchedulesClient, network: RouteNetwork, config: SearchConfig) -> Self {
        Self {
            schedules: Arc::new(schedules),
            network,
            config: Arc::new(config),
        }
    }
}
