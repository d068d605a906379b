//! Mock schedule source for testing without API access.
//!
//! Serves canned schedules from JSON files or programmatic inserts,
//! and records every request so tests can assert which months were
//! fetched upstream.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::Iata;
use crate::planner::ScheduleSource;

use super::error::ScheduleError;
use super::types::Schedule;

/// Identifies one upstream schedule request.
pub type ScheduleKey = (Iata, Iata, i32, u32);

/// Mock schedule source backed by an in-memory map.
#[derive(Clone, Default)]
pub struct MockScheduleSource {
    schedules: Arc<RwLock<HashMap<ScheduleKey, Schedule>>>,
    requests: Arc<Mutex<Vec<ScheduleKey>>>,
}

impl MockScheduleSource {
    /// Create an empty mock with no schedules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named `{FROM}-{TO}-{YEAR}-{MONTH}.json`
    /// (e.g. `DUB-WRO-2024-1.json`).
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let data_dir = data_dir.as_ref();
        let mut schedules = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ScheduleError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ScheduleError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ScheduleError::ApiError {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?;

            let key = parse_key(stem).ok_or_else(|| ScheduleError::ApiError {
                status: 0,
                message: format!("Invalid mock schedule filename: {}", stem),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| ScheduleError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let schedule: Schedule =
                serde_json::from_str(&json).map_err(|e| ScheduleError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            schedules.insert(key, schedule);
        }

        if schedules.is_empty() {
            return Err(ScheduleError::ApiError {
                status: 0,
                message: format!("No mock schedule files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            schedules: Arc::new(RwLock::new(schedules)),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Insert a schedule for an airport pair and month.
    pub async fn insert(
        &self,
        origin: Iata,
        destination: Iata,
        year: i32,
        month: u32,
        schedule: Schedule,
    ) {
        let mut schedules = self.schedules.write().await;
        schedules.insert((origin, destination, year, month), schedule);
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<ScheduleKey> {
        let requests = self.requests.lock().await;
        requests.clone()
    }
}

/// Parse `{FROM}-{TO}-{YEAR}-{MONTH}` into a schedule key.
fn parse_key(stem: &str) -> Option<ScheduleKey> {
    let mut parts = stem.split('-');
    let from = Iata::parse(parts.next()?).ok()?;
    let to = Iata::parse(parts.next()?).ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) {
        return None;
    }
    Some((from, to, year, month))
}

#[async_trait]
impl ScheduleSource for MockScheduleSource {
    async fn get_schedule(
        &self,
        origin: Iata,
        destination: Iata,
        year: i32,
        month: u32,
    ) -> Result<Schedule, ScheduleError> {
        let key = (origin, destination, year, month);

        {
            let mut requests = self.requests.lock().await;
            requests.push(key);
        }

        let schedules = self.schedules.read().await;
        schedules
            .get(&key)
            .cloned()
            .ok_or(ScheduleError::ScheduleNotFound)
    }
}
