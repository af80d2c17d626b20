//! Earliest-arrival search.
//!
//! Both searches share one label-setting skeleton: settle the cheapest
//! unsettled station, then relax every link out of it. They differ only in
//! how a link's cost is worked out. Fixed-weight links cost their weight;
//! timetabled links cost the wait for a train plus the ride, which depends
//! on when the traveller actually reaches the station.

mod config;
mod cost;
mod fixed;
mod search;
mod select;
mod timetabled;


pub use config::{InvalidWaitPolicy, SearchConfig, WaitPolicy};
pub use cost::edge_cost;
pub use fixed::shortest_path_distances;
pub use search::{SearchError, SearchResult, label_setting};
pub use select::next_to_process;
pub use timetabled::{JourneyQuery, Planner, shortest_travel_time};
