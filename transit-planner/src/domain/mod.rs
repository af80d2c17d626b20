//! Domain types for the transit planner.
//!
//! Stations are plain indices into the network matrices; times are whole
//! minutes. The "no route" case is an explicit variant rather than a
//! magic number, so arithmetic never touches it.

mod service;
mod station;
mod time;

pub use service::ScheduledService;
pub use station::StationId;
pub use time::{Minutes, TravelTime};
