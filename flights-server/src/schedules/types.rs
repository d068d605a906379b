//! Schedule Source wire types.
//!
//! JSON shapes as the Schedule Source returns them: a month of per-day
//! flight listings with local "HH:MM" times. The year is not part of
//! the payload; the fetcher knows it from the month it asked for.

use chrono::NaiveTime;
use serde::Deserialize;

/// One month of scheduled flights for an airport pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schedule {
    /// Month of the year (1-12).
    pub month: u32,
    /// Per-day flight listings.
    pub days: Vec<FlightsDay>,
}

/// The flights scheduled on one day of the month.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightsDay {
    /// Day of the month (1-31).
    pub day: u32,
    /// Flights departing that day.
    pub flights: Vec<FlightTimes>,
}

/// A single scheduled flight with local times-of-day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightTimes {
    /// Flight number (e.g. "1926").
    pub number: String,
    /// Local departure time-of-day.
    #[serde(with = "hhmm")]
    pub departure_time: NaiveTime,
    /// Local arrival time-of-day.
    #[serde(with = "hhmm")]
    pub arrival_time: NaiveTime,
}

/// Serde adapter for "HH:MM" times (seconds tolerated if present).
///
/// The upstream emits times like "06:25", which chrono's default
/// `NaiveTime` format does not accept.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_schedule() {
        let json = r#"{
            "month": 6,
            "days": [
                {
                    "day": 1,
                    "flights": [
                        {"number": "1926", "departureTime": "06:25", "arrivalTime": "09:40"},
                        {"number": "1927", "departureTime": "18:10", "arrivalTime": "21:25"}
                    ]
                },
                {"day": 2, "flights": []}
            ]
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.month, 6);
        assert_eq!(schedule.days.len(), 2);
        assert_eq!(schedule.days[0].flights.len(), 2);
        assert_eq!(schedule.days[0].flights[0].number, "1926");
        assert_eq!(
            schedule.days[0].flights[0].departure_time,
            NaiveTime::from_hms_opt(6, 25, 0).unwrap()
        );
        assert_eq!(
            schedule.days[0].flights[1].arrival_time,
            NaiveTime::from_hms_opt(21, 25, 0).unwrap()
        );
        assert!(schedule.days[1].flights.is_empty());
    }

    #[test]
    fn deserialize_time_with_seconds() {
        let json =
            r#"{"number": "10", "departureTime": "06:25:30", "arrivalTime": "09:40:00"}"#;
        let flight: FlightTimes = serde_json::from_str(json).unwrap();
        assert_eq!(
            flight.departure_time,
            NaiveTime::from_hms_opt(6, 25, 30).unwrap()
        );
    }

    #[test]
    fn reject_malformed_time() {
        let json = r#"{"number": "10", "departureTime": "6.25", "arrivalTime": "09:40"}"#;
        assert!(serde_json::from_str::<FlightTimes>(json).is_err());
    }
}
