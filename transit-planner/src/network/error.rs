//! Network construction and loading errors.

use std::path::PathBuf;

/// Errors raised while building or loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The matrix has no rows
    #[error("network must contain at least one station")]
    Empty,

    /// A row's length differs from the number of rows
    #[error("matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Timetable matrices disagree on the number of stations
    #[error("{matrix} matrix covers {found} stations, expected {expected}")]
    DimensionMismatch {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },

    /// Reading the network file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The network file is not valid JSON for the expected layout
    #[error("invalid network file: {0}")]
    Json(#[from] serde_json::Error),
}
