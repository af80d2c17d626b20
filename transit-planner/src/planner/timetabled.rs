//! Earliest arrival over timetabled services.

use tracing::debug;

use super::config::SearchConfig;
use super::cost::edge_cost;
use super::search::{SearchError, SearchResult, label_setting};
use crate::domain::{Minutes, StationId, TravelTime};
use crate::network::TimetabledNetwork;

/// Request for an earliest-arrival search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyQuery {
    /// Station the traveller leaves from.
    pub source: StationId,

    /// Station the traveller wants to reach.
    pub target: StationId,

    /// Clock time the traveller is ready to leave `source`.
    pub journey_start: Minutes,
}

impl JourneyQuery {
    /// Create a new journey query.
    pub fn new(source: StationId, target: StationId, journey_start: Minutes) -> Self {
        Self {
            source,
            target,
            journey_start,
        }
    }

    /// Validate the query against a network of `station_count` stations.
    pub fn validate(&self, station_count: usize) -> Result<(), SearchError> {
        SearchError::check_station(self.source, station_count)?;
        SearchError::check_station(self.target, station_count)
    }
}

/// Earliest-arrival planner over a timetabled network.
pub struct Planner<'a> {
    network: &'a TimetabledNetwork,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a TimetabledNetwork, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Minutes from leaving `query.source` to arriving at `query.target`.
    ///
    /// Returns [`TravelTime::Unreachable`] when no sequence of services
    /// connects the two.
    pub fn plan(&self, query: &JourneyQuery) -> Result<TravelTime, SearchError> {
        let result = self.arrivals(query)?;
        let time = result.time_to(query.target);

        debug!(
            source = %query.source,
            target = %query.target,
            journey_start = query.journey_start,
            result = %time,
            "Journey planned"
        );

        Ok(time)
    }

    /// Travel times from `query.source` to every station.
    ///
    /// The target is only validated; the search itself always covers the
    /// whole network.
    pub fn arrivals(&self, query: &JourneyQuery) -> Result<SearchResult, SearchError> {
        query.validate(self.network.station_count())?;

        let policy = self.config.wait_policy;
        label_setting(
            self.network.station_count(),
            query.source,
            |from, to, best| {
                let service = self.network.service(from, to)?;
                let arrival = best.checked_add(query.journey_start)?;
                edge_cost(arrival, &service, policy)
            },
        )
    }
}

/// Earliest arrival with the default search configuration.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::{StationId, TravelTime};
/// use transit_planner::network::{Matrix, TimetabledNetwork};
/// use transit_planner::planner::{JourneyQuery, shortest_travel_time};
///
/// let network = TimetabledNetwork::new(
///     Matrix::from_rows(vec![vec![0, 10, 0], vec![0, 0, 20], vec![0, 0, 0]]).unwrap(),
///     Matrix::from_rows(vec![vec![0, 5, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap(),
///     Matrix::from_rows(vec![vec![0, 15, 0], vec![0, 0, 10], vec![0, 0, 0]]).unwrap(),
/// )
/// .unwrap();
///
/// let query = JourneyQuery::new(StationId(0), StationId(2), 0);
/// assert_eq!(shortest_travel_time(&network, &query), Ok(TravelTime::Reachable(40)));
/// ```
pub fn shortest_travel_time(
    network: &TimetabledNetwork,
    query: &JourneyQuery,
) -> Result<TravelTime, SearchError> {
    Planner::new(network, &SearchConfig::default()).plan(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Matrix;

    fn network(
        durations: Vec<Vec<u32>>,
        first: Vec<Vec<u32>>,
        freq: Vec<Vec<u32>>,
    ) -> TimetabledNetwork {
        TimetabledNetwork::new(
            Matrix::from_rows(durations).unwrap(),
            Matrix::from_rows(first).unwrap(),
            Matrix::from_rows(freq).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn query_validation() {
        let query = JourneyQuery::new(StationId(0), StationId(3), 0);
        assert_eq!(
            query.validate(3),
            Err(SearchError::StationOutOfRange {
                station: StationId(3),
                station_count: 3,
            })
        );
        assert!(
            JourneyQuery::new(StationId(2), StationId(0), 0)
                .validate(3)
                .is_ok()
        );
    }

    #[test]
    fn target_out_of_range() {
        let net = network(
            vec![vec![0, 1], vec![1, 0]],
            vec![vec![0; 2]; 2],
            vec![vec![0, 1], vec![1, 0]],
        );
        let query = JourneyQuery::new(StationId(0), StationId(5), 0);
        assert!(shortest_travel_time(&net, &query).is_err());
    }

    #[test]
    fn journey_start_shifts_the_clock() {
        // One link: 6 minutes, trains at 10, 20, 30, ...
        let net = network(
            vec![vec![0, 6], vec![0, 0]],
            vec![vec![0, 10], vec![0, 0]],
            vec![vec![0, 10], vec![0, 0]],
        );

        let at = |start| {
            shortest_travel_time(&net, &JourneyQuery::new(StationId(0), StationId(1), start))
        };

        assert_eq!(at(0), Ok(TravelTime::Reachable(16)));
        assert_eq!(at(10), Ok(TravelTime::Reachable(6)));
        assert_eq!(at(14), Ok(TravelTime::Reachable(10)));
    }

    #[test]
    fn config_selects_wait_policy() {
        // Trains at 1, 6, 11, ...; leaving at 7
        let net = network(
            vec![vec![0, 4], vec![0, 0]],
            vec![vec![0, 1], vec![0, 0]],
            vec![vec![0, 5], vec![0, 0]],
        );
        let query = JourneyQuery::new(StationId(0), StationId(1), 7);

        let reference = SearchConfig::default();
        let next = SearchConfig::new(crate::planner::WaitPolicy::UntilNextDeparture);

        assert_eq!(
            Planner::new(&net, &reference).plan(&query),
            Ok(TravelTime::Reachable(6))
        );
        assert_eq!(
            Planner::new(&net, &next).plan(&query),
            Ok(TravelTime::Reachable(8))
        );
    }
}
