//! Distance tables and journey summaries.

use std::fmt::Write;

use chrono::{Duration, NaiveTime};

use super::station_label;
use crate::domain::{Minutes, TravelTime};
use crate::planner::JourneyQuery;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Configuration for rendering reports.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Wall-clock time of minute zero, in minutes after midnight.
    pub service_day_start_mins: Minutes,
}

impl ReportConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(service_day_start_mins: Minutes) -> Self {
        Self {
            service_day_start_mins,
        }
    }

    /// Wall-clock rendering (`HH:MM`) of a clock offset in minutes.
    ///
    /// Wraps past midnight.
    pub fn clock_label(&self, minutes: Minutes) -> String {
        let offset = Duration::minutes(i64::from(self.service_day_start_mins))
            + Duration::minutes(i64::from(minutes));
        let secs = offset.num_seconds().rem_euclid(SECONDS_PER_DAY);
        NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)
            .map(|time| time.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            service_day_start_mins: 5 * 60 + 30, // 05:30
        }
    }
}

/// Table of travel times from a source, one line per station.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::TravelTime;
/// use transit_planner::report::format_distances;
///
/// let table = format_distances(&[TravelTime::Reachable(0), TravelTime::Unreachable]);
/// assert_eq!(
///     table,
///     "Vertex Distances (time) from Source\n0: 0 minutes\n1: unreachable\n"
/// );
/// ```
pub fn format_distances(times: &[TravelTime]) -> String {
    let mut out = String::from("Vertex Distances (time) from Source\n");
    for (station, time) in times.iter().enumerate() {
        let _ = writeln!(out, "{station}: {time}");
    }
    out
}

/// One-line summary of a planned journey.
pub fn format_journey(query: &JourneyQuery, total: TravelTime, config: &ReportConfig) -> String {
    format!(
        "Start: {} End: {} Start time: {} ({}) Total time: {}",
        station_label(query.source),
        station_label(query.target),
        query.journey_start,
        config.clock_label(query.journey_start),
        total
    )
}
