//! Cost of riding one timetabled link.

use super::WaitPolicy;
use crate::domain::{Minutes, ScheduledService};

/// Minutes consumed taking `service` when reaching its station at clock
/// time `arrival`: the wait for a train plus the ride.
///
/// An inert service (no travel time or no frequency) costs nothing; the
/// network never hands one out as a link, so this only guards direct
/// callers. Returns `None` if the total does not fit in [`Minutes`].
///
/// # Examples
///
/// ```
/// use transit_planner::domain::ScheduledService;
/// use transit_planner::planner::{WaitPolicy, edge_cost};
///
/// let service = ScheduledService::new(10, 5, 15);
///
/// // Early: wait for the first train at 5
/// assert_eq!(edge_cost(0, &service, WaitPolicy::default()), Some(15));
///
/// // Exactly on time: board straight away
/// assert_eq!(edge_cost(5, &service, WaitPolicy::default()), Some(10));
/// ```
pub fn edge_cost(
    arrival: Minutes,
    service: &ScheduledService,
    policy: WaitPolicy,
) -> Option<Minutes> {
    if service.is_inert() {
        return Some(0);
    }

    let first = service.first_departure;
    let frequency = service.frequency;

    let wait = if arrival < first {
        first - arrival
    } else if arrival == first {
        0
    } else {
        match policy {
            // |floor(arrival / frequency) * frequency - arrival|
            WaitPolicy::SinceLastMultiple => arrival % frequency,
            WaitPolicy::UntilNextDeparture => {
                (frequency - (arrival - first) % frequency) % frequency
            }
        }
    };

    wait.checked_add(service.travel)
}
