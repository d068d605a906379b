//! Route Source API client.

use serde::Deserialize;

use super::error::RouteError;

/// Default base URL for the Route Source API.
const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com/locate/3";

/// Minimal DTO for a route - we only need the airport pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub airport_from: String,
    pub airport_to: String,
}

/// Configuration for the Route Source client.
#[derive(Debug, Clone)]
pub struct RoutesClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutesClientConfig {
    /// Create a config with the default endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or alternative deployments).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for RoutesClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Route Source API.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutesClient {
    /// Create a new Route Source client.
    pub fn new(config: RoutesClientConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full list of directly-served airport pairs.
    pub async fn fetch_all(&self) -> Result<Vec<RouteDto>, RouteError> {
        let url = format!("{}/routes", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let routes: Vec<RouteDto> = serde_json::from_str(&body).map_err(|e| RouteError::Json {
            message: e.to_string(),
        })?;

        Ok(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = RoutesClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_base_url() {
        let config = RoutesClientConfig::new().with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn client_creation() {
        let client = RoutesClient::new(RoutesClientConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn route_dto_deserializes_camel_case() {
        let json = r#"{"airportFrom": "DUB", "airportTo": "WRO"}"#;
        let route: RouteDto = serde_json::from_str(json).unwrap();
        assert_eq!(route.airport_from, "DUB");
        assert_eq!(route.airport_to, "WRO");
    }
}
