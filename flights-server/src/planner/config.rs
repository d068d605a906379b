//! Search configuration for the connection planner.

/// Configuration parameters for connection discovery.
///
/// The minimum connection buffer is deliberately *not* here: it is a
/// fixed policy constant, see
/// [`MIN_CONNECTION_HOURS`](super::MIN_CONNECTION_HOURS).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of intermediate airports allowed on a route.
    /// The analyzer's designed ceiling is 1; raising this only
    /// produces routes the analyzer will ignore.
    pub max_intermediate_stops: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_intermediate_stops: usize) -> Self {
        Self {
            max_intermediate_stops,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_intermediate_stops: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_intermediate_stops, 1);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(2);
        assert_eq!(config.max_intermediate_stops, 2);
    }
}
