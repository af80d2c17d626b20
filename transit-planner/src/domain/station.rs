//! Station identifiers.

use std::fmt;

/// Index of a station in the network matrices.
///
/// Valid indices are `0..station_count` of the network they are used
/// with; the network, not this type, checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the raw matrix index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StationId {
    fn from(index: usize) -> Self {
        StationId(index)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
