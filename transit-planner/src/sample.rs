//! The reference nine-station network.
//!
//! Every link carries the same timetable shape: first train at minute 1,
//! then every 5 minutes. Travel times double as the fixed weights for the
//! baseline search.

use crate::domain::Minutes;
use crate::network::{Matrix, NetworkError, StaticNetwork, TimetabledNetwork};

const STATIONS: usize = 9;

const TRAVEL: [[Minutes; STATIONS]; STATIONS] = [
    [0, 4, 0, 0, 0, 0, 0, 8, 0],
    [4, 0, 8, 0, 0, 0, 0, 11, 0],
    [0, 8, 0, 7, 0, 4, 0, 0, 2],
    [0, 0, 7, 0, 9, 14, 0, 0, 0],
    [0, 0, 0, 9, 0, 10, 0, 0, 0],
    [0, 0, 4, 14, 10, 0, 2, 0, 0],
    [0, 0, 0, 0, 0, 2, 0, 1, 6],
    [8, 11, 0, 0, 0, 0, 1, 0, 7],
    [0, 0, 2, 0, 0, 0, 6, 7, 0],
];

const FIRST_DEPARTURE: Minutes = 1;
const FREQUENCY: Minutes = 5;

fn travel_rows() -> Vec<Vec<Minutes>> {
    TRAVEL.iter().map(|row| row.to_vec()).collect()
}

/// Timing rows: `value` wherever a link exists, zero elsewhere.
fn timing_rows(value: Minutes) -> Vec<Vec<Minutes>> {
    TRAVEL
        .iter()
        .map(|row| row.iter().map(|&t| if t == 0 { 0 } else { value }).collect())
        .collect()
}

/// The sample network with fixed link weights.
pub fn static_network() -> Result<StaticNetwork, NetworkError> {
    StaticNetwork::from_rows(travel_rows())
}

/// The sample network with its timetable.
pub fn timetabled_network() -> Result<TimetabledNetwork, NetworkError> {
    TimetabledNetwork::new(
        Matrix::from_rows(travel_rows())?,
        Matrix::from_rows(timing_rows(FIRST_DEPARTURE))?,
        Matrix::from_rows(timing_rows(FREQUENCY))?,
    )
}
