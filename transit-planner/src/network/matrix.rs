//! Square matrices of minutes.

use serde::Deserialize;

use super::NetworkError;
use crate::domain::{Minutes, StationId};

/// A validated `N×N` matrix indexed by station.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::StationId;
/// use transit_planner::network::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![0, 4], vec![4, 0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(StationId(0), StationId(1)), 4);
///
/// // Ragged input is rejected
/// assert!(Matrix::from_rows(vec![vec![0, 4], vec![4]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<Minutes>>")]
pub struct Matrix {
    size: usize,
    cells: Vec<Minutes>,
}

impl Matrix {
    /// Build a matrix from rows, checking that it is square and non-empty.
    pub fn from_rows(rows: Vec<Vec<Minutes>>) -> Result<Self, NetworkError> {
        let size = rows.len();
        if size == 0 {
            return Err(NetworkError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(NetworkError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Number of stations the matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry for the link `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either station is outside `0..size()`.
    pub fn get(&self, from: StationId, to: StationId) -> Minutes {
        assert!(
            from.0 < self.size && to.0 < self.size,
            "station out of range for {}x{} matrix",
            self.size,
            self.size
        );
        self.cells[from.0 * self.size + to.0]
    }
}

impl TryFrom<Vec<Vec<Minutes>>> for Matrix {
    type Error = NetworkError;

    fn try_from(rows: Vec<Vec<Minutes>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}
