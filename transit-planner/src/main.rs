use std::error::Error;
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use transit_planner::domain::{Minutes, StationId};
use transit_planner::network::{TimetabledNetwork, load_timetabled};
use transit_planner::planner::{
    JourneyQuery, Planner, SearchConfig, WaitPolicy, shortest_path_distances,
};
use transit_planner::report::{ReportConfig, format_distances, format_journey, station_label};
use transit_planner::sample;

const USAGE: &str = "usage: transit-planner [<network.json> <from> <to> [start]]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let search_config = SearchConfig::new(wait_policy_from_env()?);
    let report_config = ReportConfig::default();

    match args {
        [] => run_demo(&search_config, &report_config),
        [path, from, to] => {
            let network = load_timetabled(path)?;
            let query = JourneyQuery::new(parse_station(from)?, parse_station(to)?, 0);
            print_journey(&network, &query, &search_config, &report_config)
        }
        [path, from, to, start] => {
            let network = load_timetabled(path)?;
            let start: Minutes = start
                .parse()
                .map_err(|e| format!("invalid start time {start:?}: {e}"))?;
            let query = JourneyQuery::new(parse_station(from)?, parse_station(to)?, start);
            print_journey(&network, &query, &search_config, &report_config)
        }
        _ => Err("unexpected arguments".into()),
    }
}

/// Wait policy from `TRANSIT_WAIT_POLICY`, defaulting when unset.
fn wait_policy_from_env() -> Result<WaitPolicy, Box<dyn Error>> {
    match std::env::var("TRANSIT_WAIT_POLICY") {
        Ok(value) => Ok(value.parse()?),
        Err(std::env::VarError::NotPresent) => Ok(WaitPolicy::default()),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable TRANSIT_WAIT_POLICY");
            Ok(WaitPolicy::default())
        }
    }
}

/// Stations are given as indices or as their letter (A-Q).
fn parse_station(s: &str) -> Result<StationId, Box<dyn Error>> {
    if let Ok(index) = s.parse::<usize>() {
        return Ok(StationId(index));
    }
    (0..17)
        .map(StationId)
        .find(|&id| station_label(id).eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown station {s:?}").into())
}

fn run_demo(
    search_config: &SearchConfig,
    report_config: &ReportConfig,
) -> Result<(), Box<dyn Error>> {
    let static_network = sample::static_network()?;
    let distances = shortest_path_distances(&static_network, StationId(0))?;
    print!("{}", format_distances(&distances));

    println!();
    println!("Run tests using time considerations ({}).", search_config.wait_policy);

    let network = sample::timetabled_network()?;
    for query in [
        JourneyQuery::new(StationId(0), StationId(3), 5),
        JourneyQuery::new(StationId(1), StationId(4), 0),
    ] {
        println!();
        print_journey(&network, &query, search_config, report_config)?;
    }

    Ok(())
}

fn print_journey(
    network: &TimetabledNetwork,
    query: &JourneyQuery,
    search_config: &SearchConfig,
    report_config: &ReportConfig,
) -> Result<(), Box<dyn Error>> {
    println!(
        "Calculate time from station {} to station {}",
        station_label(query.source),
        station_label(query.target)
    );
    let total = Planner::new(network, search_config).plan(query)?;
    println!("{}", format_journey(query, total, report_config));
    Ok(())
}
