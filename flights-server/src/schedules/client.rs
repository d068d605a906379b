//! Schedule Source HTTP client.
//!
//! Provides async access to the per-month flight schedule API. Uses a
//! semaphore to limit concurrent requests and avoid rate limiting.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::domain::Iata;
use crate::planner::ScheduleSource;

use super::error::ScheduleError;
use super::types::Schedule;

/// Default base URL for the Schedule Source API.
const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com/timtbl/3/schedules";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the schedules client.
#[derive(Debug, Clone)]
pub struct SchedulesClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SchedulesClientConfig {
    /// Create a config with the default endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for SchedulesClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedule Source API client.
#[derive(Debug, Clone)]
pub struct SchedulesClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl SchedulesClient {
    /// Create a new schedules client with the given configuration.
    pub fn new(config: SchedulesClientConfig) -> Result<Self, ScheduleError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

#[async_trait]
impl ScheduleSource for SchedulesClient {
    /// Get the raw schedule for an airport pair and month.
    async fn get_schedule(
        &self,
        origin: Iata,
        destination: Iata,
        year: i32,
        month: u32,
    ) -> Result<Schedule, ScheduleError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ScheduleError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/{}/{}/years/{}/months/{}",
            self.base_url, origin, destination, year, month
        );

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScheduleError::ScheduleNotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScheduleError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ScheduleError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = SchedulesClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = SchedulesClientConfig::new();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = SchedulesClient::new(SchedulesClientConfig::new());
        assert!(client.is_ok());
    }

    // Integration tests would go here, but would make actual HTTP
    // requests. They should be marked with #[ignore] and run separately.
}
