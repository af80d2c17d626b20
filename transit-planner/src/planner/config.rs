//! Search configuration for the planner.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown wait policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wait policy {0:?}: expected since-last-multiple or until-next-departure")]
pub struct InvalidWaitPolicy(String);

/// How the wait at a station is worked out once trains are running.
///
/// Before the first departure both policies wait for it, and arriving
/// exactly at the first departure boards immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WaitPolicy {
    /// Minutes elapsed since the last multiple of the frequency.
    ///
    /// This matches the published reference results, even though it is
    /// not the wait until the next train in general.
    #[default]
    SinceLastMultiple,

    /// Minutes until the next train on the service's own timetable
    /// (`first_departure + k * frequency`).
    UntilNextDeparture,
}

impl WaitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitPolicy::SinceLastMultiple => "since-last-multiple",
            WaitPolicy::UntilNextDeparture => "until-next-departure",
        }
    }
}

impl FromStr for WaitPolicy {
    type Err = InvalidWaitPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "since-last-multiple" => Ok(WaitPolicy::SinceLastMultiple),
            "until-next-departure" => Ok(WaitPolicy::UntilNextDeparture),
            other => Err(InvalidWaitPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for WaitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration parameters for journey search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// How waits at stations are computed.
    pub wait_policy: WaitPolicy,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(wait_policy: WaitPolicy) -> Self {
        Self { wait_policy }
    }
}
