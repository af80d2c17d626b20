//! Station letters.

use crate::domain::StationId;

const LETTERS: [&str; 17] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
];

/// Display letter for a station: 0 is "A" through 16 is "Q".
///
/// Stations beyond that range have no letter and render as "?".
///
/// # Examples
///
/// ```
/// use transit_planner::domain::StationId;
/// use transit_planner::report::station_label;
///
/// assert_eq!(station_label(StationId(0)), "A");
/// assert_eq!(station_label(StationId(16)), "Q");
/// assert_eq!(station_label(StationId(17)), "?");
/// ```
pub fn station_label(station: StationId) -> &'static str {
    LETTERS.get(station.0).copied().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_index() {
        let labels: String = (0..17).map(|i| station_label(StationId(i))).collect();
        assert_eq!(labels, "ABCDEFGHIJKLMNOPQ");
    }

    #[test]
    fn out_of_range_is_question_mark() {
        assert_eq!(station_label(StationId(17)), "?");
        assert_eq!(station_label(StationId(usize::MAX)), "?");
    }
}
