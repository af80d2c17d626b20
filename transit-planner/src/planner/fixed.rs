//! Fixed-weight baseline search.

use super::search::{SearchError, label_setting};
use crate::domain::{StationId, TravelTime};
use crate::network::StaticNetwork;

/// Shortest travel time from `source` to every station of a fixed-weight
/// network.
///
/// Stations with no route from `source` are [`TravelTime::Unreachable`].
pub fn shortest_path_distances(
    network: &StaticNetwork,
    source: StationId,
) -> Result<Vec<TravelTime>, SearchError> {
    let result = label_setting(network.station_count(), source, |from, to, _| {
        network.weight(from, to)
    })?;
    Ok(result.labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TravelTime::{Reachable, Unreachable};

    #[test]
    fn one_way_link_is_not_reversed() {
        let network = StaticNetwork::from_rows(vec![vec![0, 5], vec![0, 0]]).unwrap();

        assert_eq!(
            shortest_path_distances(&network, StationId(0)).unwrap(),
            vec![Reachable(0), Reachable(5)]
        );
        assert_eq!(
            shortest_path_distances(&network, StationId(1)).unwrap(),
            vec![Unreachable, Reachable(0)]
        );
    }

    #[test]
    fn detour_beats_direct_link() {
        let network = StaticNetwork::from_rows(vec![
            vec![0, 10, 2],
            vec![0, 0, 0],
            vec![0, 3, 0],
        ])
        .unwrap();

        assert_eq!(
            shortest_path_distances(&network, StationId(0)).unwrap(),
            vec![Reachable(0), Reachable(5), Reachable(2)]
        );
    }

    #[test]
    fn source_out_of_range() {
        let network = StaticNetwork::from_rows(vec![vec![0]]).unwrap();
        assert!(matches!(
            shortest_path_distances(&network, StationId(1)),
            Err(SearchError::StationOutOfRange { .. })
        ));
    }
}
