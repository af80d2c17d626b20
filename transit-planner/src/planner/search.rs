//! Label-setting search skeleton shared by both planners.

use tracing::{debug, trace};

use super::select::next_to_process;
use crate::domain::{Minutes, StationId, TravelTime};

/// Error from journey search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A query named a station the network does not have
    #[error("station {station} is out of range for a network of {station_count} stations")]
    StationOutOfRange {
        station: StationId,
        station_count: usize,
    },
}

impl SearchError {
    /// Check that `station` indexes a network of `station_count` stations.
    pub(crate) fn check_station(
        station: StationId,
        station_count: usize,
    ) -> Result<(), SearchError> {
        if station.0 < station_count {
            Ok(())
        } else {
            Err(SearchError::StationOutOfRange {
                station,
                station_count,
            })
        }
    }
}

/// Result of a label-setting search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best travel time from the source, one per station.
    pub labels: Vec<TravelTime>,

    /// Stations in the order they were settled.
    pub settled: Vec<StationId>,
}

impl SearchResult {
    /// Travel time to `station`.
    ///
    /// # Panics
    ///
    /// Panics if `station` was not part of the searched network.
    pub fn time_to(&self, station: StationId) -> TravelTime {
        self.labels[station.0]
    }
}

/// Run a label-setting search from `source` over `station_count` stations.
///
/// `link(from, to, best)` gives the cost of the link `from → to` for a
/// traveller who reached `from` after `best` minutes, or `None` when there
/// is no usable link. It is only asked about links out of reachable
/// stations into unsettled ones.
///
/// The search settles exactly `station_count - 1` stations (see
/// [`next_to_process`] for tie-breaking); the last station's label is
/// final once everything else is.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::{StationId, TravelTime};
/// use transit_planner::planner::label_setting;
///
/// // A line 0 → 1 → 2, each hop costing 3
/// let result = label_setting(3, StationId(0), |from, to, _| {
///     (to.0 == from.0 + 1).then_some(3)
/// })
/// .unwrap();
///
/// assert_eq!(result.time_to(StationId(2)), TravelTime::Reachable(6));
/// ```
pub fn label_setting<F>(
    station_count: usize,
    source: StationId,
    mut link: F,
) -> Result<SearchResult, SearchError>
where
    F: FnMut(StationId, StationId, Minutes) -> Option<Minutes>,
{
    SearchError::check_station(source, station_count)?;

    let mut labels = vec![TravelTime::Unreachable; station_count];
    let mut processed = vec![false; station_count];
    let mut settled = Vec::with_capacity(station_count.saturating_sub(1));

    labels[source.0] = TravelTime::Reachable(0);

    for _ in 1..station_count {
        let Some(from) = next_to_process(&labels, &processed) else {
            break;
        };
        processed[from.0] = true;
        settled.push(from);

        let Some(best) = labels[from.0].minutes() else {
            trace!(station = %from, "Settled unreachable station");
            continue;
        };
        trace!(station = %from, best, "Settled station");

        for to in (0..station_count).map(StationId) {
            if processed[to.0] {
                continue;
            }

            let Some(cost) = link(from, to, best) else {
                continue;
            };

            let Some(candidate) = labels[from.0].checked_add(cost) else {
                continue;
            };

            if candidate < labels[to.0] {
                trace!(from = %from, to = %to, cost, "Improved label");
                labels[to.0] = candidate;
            }
        }
    }

    debug!(
        stations = station_count,
        source = %source,
        reachable = labels.iter().filter(|t| t.is_reachable()).count(),
        "Label-setting search complete"
    );

    Ok(SearchResult { labels, settled })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SearchError::StationOutOfRange {
            station: StationId(9),
            station_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "station 9 is out of range for a network of 3 stations"
        );
    }

    #[test]
    fn source_out_of_range() {
        let err = label_setting(2, StationId(2), |_, _, _| Some(1)).unwrap_err();
        assert_eq!(
            err,
            SearchError::StationOutOfRange {
                station: StationId(2),
                station_count: 2,
            }
        );
    }

    #[test]
    fn single_station_settles_nothing() {
        let result = label_setting(1, StationId(0), |_, _, _| Some(1)).unwrap();
        assert_eq!(result.labels, vec![TravelTime::Reachable(0)]);
        assert!(result.settled.is_empty());
    }

    #[test]
    fn never_links_from_unreachable_stations() {
        // Only 0 → 1 exists; 2 is isolated and must never be asked about
        let mut asked_from = Vec::new();
        let result = label_setting(3, StationId(0), |from, to, _| {
            asked_from.push(from);
            (from.0 == 0 && to.0 == 1).then_some(4)
        })
        .unwrap();

        assert_eq!(
            result.labels,
            vec![
                TravelTime::Reachable(0),
                TravelTime::Reachable(4),
                TravelTime::Unreachable,
            ]
        );
        assert!(asked_from.iter().all(|s| s.0 != 2));
    }

    #[test]
    fn never_links_into_settled_stations() {
        let result = label_setting(3, StationId(0), |_, to, _| {
            assert_ne!(to, StationId(0), "source is settled first");
            Some(1)
        })
        .unwrap();

        assert_eq!(result.settled[0], StationId(0));
    }

    #[test]
    fn overflowing_candidates_are_ignored() {
        let result = label_setting(3, StationId(0), |from, to, _| match (from.0, to.0) {
            (0, 1) => Some(Minutes::MAX),
            (1, 2) => Some(1),
            _ => None,
        })
        .unwrap();

        assert_eq!(result.time_to(StationId(1)), TravelTime::Reachable(Minutes::MAX));
        assert_eq!(result.time_to(StationId(2)), TravelTime::Unreachable);
    }

    #[test]
    fn link_sees_best_time_of_origin() {
        let mut seen = Vec::new();
        label_setting(3, StationId(0), |from, to, best| {
            seen.push((from, best));
            (to.0 == from.0 + 1).then_some(5)
        })
        .unwrap();

        assert!(seen.contains(&(StationId(0), 0)));
        assert!(seen.contains(&(StationId(1), 5)));
    }
}
