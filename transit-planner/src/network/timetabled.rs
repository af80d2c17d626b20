//! Timetabled network: one service per directed link.

use serde::Deserialize;

use super::{Matrix, NetworkError};
use crate::domain::{ScheduledService, StationId};

/// A network whose links are scheduled services.
///
/// Three matrices over the same stations give, per link, the travel time,
/// the first departure and the service frequency. A link exists exactly
/// where the travel time is non-zero; the other two matrices are only read
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TimetableFile")]
pub struct TimetabledNetwork {
    durations: Matrix,
    first_departures: Matrix,
    frequencies: Matrix,
}

/// On-disk layout, validated into a [`TimetabledNetwork`].
#[derive(Deserialize)]
struct TimetableFile {
    durations: Matrix,
    first_departures: Matrix,
    frequencies: Matrix,
}

impl TryFrom<TimetableFile> for TimetabledNetwork {
    type Error = NetworkError;

    fn try_from(file: TimetableFile) -> Result<Self, Self::Error> {
        TimetabledNetwork::new(file.durations, file.first_departures, file.frequencies)
    }
}

impl TimetabledNetwork {
    /// Combine the three timetable matrices.
    ///
    /// Fails if they do not all cover the same number of stations.
    pub fn new(
        durations: Matrix,
        first_departures: Matrix,
        frequencies: Matrix,
    ) -> Result<Self, NetworkError> {
        let expected = durations.size();
        for (matrix, found) in [
            ("first_departures", first_departures.size()),
            ("frequencies", frequencies.size()),
        ] {
            if found != expected {
                return Err(NetworkError::DimensionMismatch {
                    matrix,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            durations,
            first_departures,
            frequencies,
        })
    }

    pub fn station_count(&self) -> usize {
        self.durations.size()
    }

    /// Whether `station` is a valid index for this network.
    pub fn contains(&self, station: StationId) -> bool {
        station.0 < self.station_count()
    }

    /// The service running `from → to`, or `None` when there is no link.
    pub fn service(&self, from: StationId, to: StationId) -> Option<ScheduledService> {
        match self.durations.get(from, to) {
            0 => None,
            travel => Some(ScheduledService::new(
                travel,
                self.first_departures.get(from, to),
                self.frequencies.get(from, to),
            )),
        }
    }
}
