//! Timetabled service on a single link.

use super::Minutes;

/// The timetable of the service running along one directed link.
///
/// Trains leave at `first_departure` and then every `frequency` minutes,
/// taking `travel` minutes to reach the next station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledService {
    /// Minutes spent on board.
    pub travel: Minutes,

    /// Clock offset of the first departure.
    pub first_departure: Minutes,

    /// Minutes between successive departures.
    pub frequency: Minutes,
}

impl ScheduledService {
    /// Create a new service.
    pub fn new(travel: Minutes, first_departure: Minutes, frequency: Minutes) -> Self {
        Self {
            travel,
            first_departure,
            frequency,
        }
    }

    /// A service with no travel time or no repetition never carries anyone.
    pub fn is_inert(&self) -> bool {
        self.travel == 0 || self.frequency == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_services() {
        assert!(ScheduledService::new(0, 5, 10).is_inert());
        assert!(ScheduledService::new(10, 5, 0).is_inert());
        assert!(!ScheduledService::new(10, 5, 15).is_inert());
    }
}
