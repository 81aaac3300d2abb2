mod types;
mod error;
mod config;
mod benchable;
mod benchmarking;
mod algorithms;
mod data;

use std::error::Error;

use clap::{App, Arg, ArgMatches, SubCommand};
use log::info;

use config::PlannerConfig;
use error::PlannerError;
use types::{Minutes, Vertex};

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &'static str) -> Result<T, PlannerError> {
    let value = matches.value_of(name).unwrap_or_default();
    value.parse().map_err(|_| PlannerError::Argument { name, value: value.to_string() })
}

/// Constant weight distances and one time-dependent route on the sample network.
fn run_sample() -> Result<(), PlannerError> {
    let weights = data::sample::sample_weights()?;
    println!("{}", algorithms::dijkstra_matrix::shortest_times(&weights, 0)?);

    let matrix = data::sample::sample_matrix();
    let (source, target): (Vertex, Vertex) = (1, 2);

    match algorithms::td_matrix::compute_fastest_arrival(source, target, 0, matrix.clone(), matrix.clone(), matrix)? {
        Some(elapsed) => println!("The shortest travel time between station {} and {} is: {}", source, target, elapsed),
        None => println!("{}", PlannerError::NoRoute { from: source, to: target })
    }

    Ok(())
}

fn run_route(matches: &ArgMatches) -> Result<(), PlannerError> {
    let source: Vertex = parse_arg(matches, "from")?;
    let target: Vertex = parse_arg(matches, "to")?;
    let start_time: Minutes = parse_arg(matches, "start")?;
    let key = matches.value_of("algorithm").unwrap_or("scan");

    let schedule = data::sample::sample_schedule()?;
    let route = algorithms::algorithm(key, &schedule)
        .ok_or_else(|| PlannerError::Argument { name: "algorithm", value: key.to_string() })?;
    info!("Routing from {} to {} with {}", source, target, route.name());

    let journey = route.find_earliest_arrival(source, target, start_time)?
        .ok_or(PlannerError::NoRoute { from: source, to: target })?;

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&journey)?);
    } else {
        println!("{}", journey);
    }

    Ok(())
}

fn run_distances(matches: &ArgMatches) -> Result<(), PlannerError> {
    let source: Vertex = parse_arg(matches, "source")?;
    let weights = data::sample::sample_weights()?;

    println!("{}", algorithms::dijkstra_matrix::shortest_times(&weights, source)?);
    Ok(())
}

fn cli() -> App<'static, 'static> {
    App::new("Transit planner")
        .about("Fastest travel times through a periodic public transport timetable")
        .author("Yoeri Otten <y.d.otten@student.utwente.nl>")
        .subcommand(SubCommand::with_name("sample")
            .about("Runs both routers on the built-in sample network"))
        .subcommand(SubCommand::with_name("route")
            .about("Finds the fastest arrival between two stations of the sample network")
            .arg(Arg::with_name("from").long("from").takes_value(true).required(true).help("Departure station"))
            .arg(Arg::with_name("to").long("to").takes_value(true).required(true).help("Arrival station"))
            .arg(Arg::with_name("start").long("start").takes_value(true).default_value("0")
                .allow_hyphen_values(true)
                .help("Departure time in minutes after 05:30"))
            .arg(Arg::with_name("algorithm").long("algorithm").takes_value(true)
                .possible_values(&["scan", "heap"])
                .default_value("scan"))
            .arg(Arg::with_name("json").long("json").help("Print the journey as JSON")))
        .subcommand(SubCommand::with_name("distances")
            .about("Constant weight distances from a station of the sample network")
            .arg(Arg::with_name("source").long("source").takes_value(true).default_value("0")))
        .subcommand(SubCommand::with_name("bench")
            .about("Benchmarks all routers on generated networks"))
}

/// Dispatches a subcommand, the configuration is only loaded for the benchmark.
fn run<F>(matches: &ArgMatches, load_config: F) -> Result<(), PlannerError>
    where F: FnOnce() -> Result<PlannerConfig, PlannerError>
{
    match matches.subcommand() {
        ("sample", _) => run_sample(),
        ("route", Some(sub_matches)) => run_route(sub_matches),
        ("distances", Some(sub_matches)) => run_distances(sub_matches),
        ("bench", _) => {
            let config = load_config()?;
            info!("Starting bench over networks of {:?} stations", config.bench_sizes);
            benchmarking::bench_algorithms(&config)
        }
        _ => run_sample(),
    }
}

fn main() -> Result<(), Box<dyn Error + 'static>> {
    env_logger::init();

    // Parse command line arguments
    let matches = cli().get_matches();
    run(&matches, PlannerConfig::from_env)?;

    Ok(())
}
