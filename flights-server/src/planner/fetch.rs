//! Schedule window fetcher.
//!
//! Turns the Schedule Source's per-month, per-day listings into absolute
//! timestamped legs filtered to a caller-supplied datetime range,
//! spanning as many calendar months as the range needs.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::domain::{Iata, Leg};
use crate::schedules::{Schedule, ScheduleError};

/// Trait for providing raw monthly schedules.
///
/// This abstraction allows the planner to be tested with mock data.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Get the schedule for an airport pair in a given month.
    async fn get_schedule(
        &self,
        origin: Iata,
        destination: Iata,
        year: i32,
        month: u32,
    ) -> Result<Schedule, ScheduleError>;
}

/// Fetches scheduled flights for an airport pair over a datetime window.
pub struct FlightFetcher<'a, S: ScheduleSource> {
    source: &'a S,
}

impl<'a, S: ScheduleSource> FlightFetcher<'a, S> {
    /// Create a new fetcher over the given schedule source.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Every scheduled leg between two airports whose departure falls in
    /// `[range_start, range_end]`.
    ///
    /// Iterates calendar months from the month containing `range_start`
    /// through the month containing `range_end`, one upstream request
    /// per month. The first month is always fetched; if the range is
    /// inverted the filter simply matches nothing.
    ///
    /// A failed month fetch is logged and stops further iteration; the
    /// legs accumulated from prior months are still returned. Degrading
    /// to partial results is deliberate: one month's outage should not
    /// void an entire multi-month query.
    pub async fn get_flights(
        &self,
        origin: Iata,
        destination: Iata,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Vec<Leg> {
        debug!(%origin, %destination, %range_start, %range_end, "fetching flights");

        let mut flights = Vec::new();
        let mut cursor = range_start;

        loop {
            let schedule = match self
                .source
                .get_schedule(origin, destination, cursor.year(), cursor.month())
                .await
            {
                Ok(schedule) => schedule,
                Err(e) => {
                    warn!(
                        %origin,
                        %destination,
                        year = cursor.year(),
                        month = cursor.month(),
                        error = %e,
                        "schedule fetch failed, returning legs collected so far"
                    );
                    break;
                }
            };

            collect_month_legs(
                &schedule,
                cursor.year(),
                origin,
                destination,
                cursor,
                range_end,
                &mut flights,
            );

            let Some(next_month) = first_instant_of_next_month(cursor) else {
                break;
            };
            cursor = next_month;
            if cursor > range_end {
                break;
            }
        }

        debug!(
            count = flights.len(),
            %origin,
            %destination,
            "flights obtained"
        );

        flights
    }
}

/// Expand one month's schedule into legs with departures in `[lower, upper]`.
fn collect_month_legs(
    schedule: &Schedule,
    year: i32,
    origin: Iata,
    destination: Iata,
    lower: NaiveDateTime,
    upper: NaiveDateTime,
    out: &mut Vec<Leg>,
) {
    for day in &schedule.days {
        // Bad upstream data can name a day the month doesn't have
        let Some(date) = NaiveDate::from_ymd_opt(year, schedule.month, day.day) else {
            debug!(
                year,
                month = schedule.month,
                day = day.day,
                "skipping impossible day in schedule data"
            );
            continue;
        };

        for flight in &day.flights {
            let departure = date.and_time(flight.departure_time);
            if lower <= departure && departure <= upper {
                out.push(Leg::new(
                    origin,
                    destination,
                    departure,
                    date.and_time(flight.arrival_time),
                ));
            }
        }
    }
}

/// The first instant of the month after the one containing `dt`.
///
/// `None` only when the year would overflow chrono's range.
fn first_instant_of_next_month(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    let (year, month) = if dt.month() == 12 {
        (dt.year() + 1, 1)
    } else {
        (dt.year(), dt.month() + 1)
    };
    Some(NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?)
}
