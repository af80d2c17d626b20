//! Choosing the next station to settle.

use crate::domain::{StationId, TravelTime};

/// Finds the unprocessed station with the smallest label.
///
/// Stations are scanned in index order and a candidate replaces the
/// current pick when its label is less than *or equal to* the best seen so
/// far, so ties go to the highest index. This includes ties at
/// [`TravelTime::Unreachable`]. Returns `None` only when every station is
/// processed.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::{StationId, TravelTime};
/// use transit_planner::planner::next_to_process;
///
/// let labels = [
///     TravelTime::Reachable(0),
///     TravelTime::Reachable(5),
///     TravelTime::Reachable(5),
/// ];
/// let processed = [true, false, false];
/// assert_eq!(next_to_process(&labels, &processed), Some(StationId(2)));
/// ```
pub fn next_to_process(labels: &[TravelTime], processed: &[bool]) -> Option<StationId> {
    debug_assert_eq!(labels.len(), processed.len());

    let mut min = TravelTime::Unreachable;
    let mut pick = None;

    for (index, (&label, &done)) in labels.iter().zip(processed).enumerate() {
        if !done && label <= min {
            min = label;
            pick = Some(StationId(index));
        }
    }

    pick
}
