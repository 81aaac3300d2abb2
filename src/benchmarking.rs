use std::time::Instant;

use csv::Writer;
use itertools::Itertools;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::{algorithms, benchable::Benchable, config::PlannerConfig, data::generator, error::PlannerError};
use crate::types::{Minutes, Schedule, Vertex};

/// Departure time used for every benchmarked query, 07:30
pub const BENCH_START_TIME: Minutes = 120;

#[derive(Serialize, Debug)]
struct RouteBench {
    network_size: usize,
    algorithm: String,
    source: Vertex,
    target: Vertex,
    elapsed: Option<Minutes>,
    time_in_ns: u128
}

pub fn bench_algorithms(config: &PlannerConfig) -> Result<(), PlannerError> {
    let mut rng = StdRng::seed_from_u64(config.bench_seed);
    let mut res = vec![];

    for &size in &config.bench_sizes {
        let schedule = generator::random_schedule(&mut rng, size, config.bench_density)?;
        info!("Generated network of {} stations", size);

        let mut network_res = vec![];
        for algorithm in algorithms::algorithms() {
            let benchable = algorithm(&schedule);
            info!("Benching: {}", benchable.name());
            network_res.extend(bench_algorithm(&benchable, &schedule)?);
        }

        let disagreements = count_disagreements(&network_res);
        if disagreements > 0 {
            warn!("Algorithms disagree on {} routes in network of {} stations", disagreements, size);
        }

        res.extend(network_res);
    }

    let mut csv = Writer::from_path(&config.bench_output)?;
    res.iter().map(|record| {
        csv.serialize(record)
    }).collect::<Result<(), _>>()?;
    csv.flush()?;

    info!("Wrote {} timings to {}", res.len(), config.bench_output);
    Ok(())
}

fn bench_algorithm<'a>(benchable: &Box<dyn Benchable<'a> + 'a>, schedule: &'a Schedule) -> Result<Vec<RouteBench>, PlannerError> {
    let size = schedule.size();
    let mut times = Vec::with_capacity(size.pow(2));

    for (source, target) in (0..size).cartesian_product(0..size) {
        let before = Instant::now();
        let journey = benchable.find_earliest_arrival(source, target, BENCH_START_TIME)?;
        let time = before.elapsed();

        times.push(RouteBench {
            network_size: size,
            algorithm: benchable.name().to_string(),
            source,
            target,
            elapsed: journey.map(|journey| journey.elapsed()),
            time_in_ns: time.as_nanos()
        });
    }

    Ok(times)
}

/// Number of routes for which not every algorithm found the same travel time.
fn count_disagreements(results: &[RouteBench]) -> usize {
    results.iter()
        .map(|bench| ((bench.source, bench.target), bench.elapsed))
        .into_group_map()
        .values()
        .filter(|elapsed| !elapsed.iter().all_equal())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn bench(algorithm: &str, source: Vertex, target: Vertex, elapsed: Option<Minutes>) -> RouteBench {
        RouteBench { network_size: 2, algorithm: algorithm.to_string(), source, target, elapsed, time_in_ns: 1 }
    }

    #[test]
    fn disagreements() {
        let results = vec![
            bench("a", 0, 1, Some(5)),
            bench("b", 0, 1, Some(5)),
            bench("a", 1, 0, None),
            bench("b", 1, 0, Some(3)),
        ];

        assert_eq!(count_disagreements(&results), 1);
    }

    #[test]
    fn writes_csv() {
        let output = std::env::temp_dir().join(format!("transit-planner-bench-{}.csv", std::process::id()));
        let config = PlannerConfig {
            bench_output: output.to_string_lossy().to_string(),
            bench_sizes: vec![4],
            ..PlannerConfig::default()
        };

        bench_algorithms(&config).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("network_size,algorithm,source,target,elapsed,time_in_ns"));
        // 4 x 4 routes for each of the algorithms
        assert_eq!(lines.count(), 16 * algorithms::algorithms().len());

        fs::remove_file(output).unwrap();
    }
}
