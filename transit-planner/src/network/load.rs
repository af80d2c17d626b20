//! Loading networks from JSON files.
//!
//! A static network file looks like `{"weights": [[0, 4], [4, 0]]}`.
//! A timetabled one carries `durations`, `first_departures` and
//! `frequencies`, each a square matrix of minutes.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{NetworkError, StaticNetwork, TimetabledNetwork};

/// Load a fixed-weight network from a JSON file.
pub fn load_static(path: impl AsRef<Path>) -> Result<StaticNetwork, NetworkError> {
    let network: StaticNetwork = read_json(path.as_ref())?;
    debug!(
        stations = network.station_count(),
        "Loaded static network"
    );
    Ok(network)
}

/// Load a timetabled network from a JSON file.
pub fn load_timetabled(path: impl AsRef<Path>) -> Result<TimetabledNetwork, NetworkError> {
    let network: TimetabledNetwork = read_json(path.as_ref())?;
    debug!(
        stations = network.station_count(),
        "Loaded timetabled network"
    );
    Ok(network)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, NetworkError> {
    let text = fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
