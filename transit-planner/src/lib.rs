//! Schedule-aware transit journey planner.
//!
//! Answers: "If I leave this station at this time, when is the earliest
//! I can reach that one?" on a network whose links are timetabled services
//! rather than fixed-cost edges.

pub mod domain;
pub mod network;
pub mod planner;
pub mod report;
pub mod sample;
