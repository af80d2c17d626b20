//! Minutes and travel-time labels.

use std::fmt;

/// A duration or clock offset in whole minutes.
pub type Minutes = u32;

/// Best known travel time to a station.
///
/// The derived ordering places every `Reachable` value before
/// `Unreachable`, so `Unreachable` behaves as infinity in comparisons
/// without ever taking part in addition.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::TravelTime;
///
/// assert!(TravelTime::Reachable(u32::MAX) < TravelTime::Unreachable);
/// assert_eq!(TravelTime::Reachable(4).checked_add(3), Some(TravelTime::Reachable(7)));
/// assert_eq!(TravelTime::Unreachable.checked_add(3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TravelTime {
    /// A route exists taking this many minutes.
    Reachable(Minutes),
    /// No route is known.
    Unreachable,
}

impl TravelTime {
    /// Returns the minutes if reachable.
    pub fn minutes(self) -> Option<Minutes> {
        match self {
            TravelTime::Reachable(m) => Some(m),
            TravelTime::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, TravelTime::Reachable(_))
    }

    /// Extends a reachable time by `extra` minutes.
    ///
    /// Returns `None` when the time is unreachable or the sum overflows.
    pub fn checked_add(self, extra: Minutes) -> Option<TravelTime> {
        self.minutes()?.checked_add(extra).map(TravelTime::Reachable)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelTime::Reachable(m) => write!(f, "{m} minutes"),
            TravelTime::Unreachable => f.write_str("unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_last() {
        let mut times = vec![
            TravelTime::Unreachable,
            TravelTime::Reachable(10),
            TravelTime::Reachable(0),
        ];
        times.sort();
        assert_eq!(
            times,
            vec![
                TravelTime::Reachable(0),
                TravelTime::Reachable(10),
                TravelTime::Unreachable,
            ]
        );
    }

    #[test]
    fn checked_add_guards_overflow() {
        assert_eq!(TravelTime::Reachable(Minutes::MAX).checked_add(1), None);
        assert_eq!(
            TravelTime::Reachable(Minutes::MAX - 1).checked_add(1),
            Some(TravelTime::Reachable(Minutes::MAX))
        );
    }

    #[test]
    fn display() {
        assert_eq!(TravelTime::Reachable(24).to_string(), "24 minutes");
        assert_eq!(TravelTime::Unreachable.to_string(), "unreachable");
    }

    #[test]
    fn minutes_accessor() {
        assert_eq!(TravelTime::Reachable(5).minutes(), Some(5));
        assert_eq!(TravelTime::Unreachable.minutes(), None);
        assert!(!TravelTime::Unreachable.is_reachable());
    }
}
