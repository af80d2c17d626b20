//! Human-readable rendering of search results.
//!
//! Nothing here feeds back into the search; it only turns station
//! indices and travel times into text.

mod labels;
mod summary;

pub use labels::station_label;
pub use summary::{ReportConfig, format_distances, format_journey};
