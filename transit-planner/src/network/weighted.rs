//! Fixed-weight network.

use serde::Deserialize;

use super::{Matrix, NetworkError};
use crate::domain::{Minutes, StationId};

/// A network whose links have a constant travel cost.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaticNetwork {
    weights: Matrix,
}

impl StaticNetwork {
    pub fn new(weights: Matrix) -> Self {
        Self { weights }
    }

    /// Build a network straight from adjacency rows.
    pub fn from_rows(rows: Vec<Vec<Minutes>>) -> Result<Self, NetworkError> {
        Ok(Self::new(Matrix::from_rows(rows)?))
    }

    pub fn station_count(&self) -> usize {
        self.weights.size()
    }

    /// Whether `station` is a valid index for this network.
    pub fn contains(&self, station: StationId) -> bool {
        station.0 < self.station_count()
    }

    /// Cost of the link `from → to`, or `None` when there is no link.
    pub fn weight(&self, from: StationId, to: StationId) -> Option<Minutes> {
        match self.weights.get(from, to) {
            0 => None,
            w => Some(w),
        }
    }
}
