use std::{env, str::FromStr};

use dotenv::dotenv;

use crate::error::PlannerError;

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub bench_output: String,
    pub bench_sizes: Vec<usize>,
    pub bench_density: f64,
    pub bench_seed: u64
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            bench_output: "bench.csv".to_string(),
            bench_sizes: vec![10, 25, 50],
            bench_density: 0.3,
            bench_seed: 42
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, PlannerError> {
    value.trim().parse().map_err(|_| PlannerError::Config { key, value: value.to_string() })
}

impl PlannerConfig {
    /// Reads the configuration from the environment, a `.env` file is loaded first when present.
    pub fn from_env() -> Result<Self, PlannerError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, PlannerError> {
        let mut config = PlannerConfig::default();

        if let Some(output) = lookup("PLANNER_BENCH_OUTPUT") {
            config.bench_output = output;
        }

        if let Some(sizes) = lookup("PLANNER_BENCH_SIZES") {
            config.bench_sizes = sizes.split(',')
                .map(|size| parse("PLANNER_BENCH_SIZES", size))
                .collect::<Result<Vec<_>, _>>()?;
        }

        if let Some(density) = lookup("PLANNER_BENCH_DENSITY") {
            config.bench_density = parse("PLANNER_BENCH_DENSITY", &density)?;
            if !(0.0..=1.0).contains(&config.bench_density) {
                return Err(PlannerError::Config { key: "PLANNER_BENCH_DENSITY", value: density });
            }
        }

        if let Some(seed) = lookup("PLANNER_BENCH_SEED") {
            config.bench_seed = parse("PLANNER_BENCH_SEED", &seed)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        assert_eq!(PlannerConfig::from_lookup(lookup(&[])).unwrap(), PlannerConfig::default());
    }

    #[test]
    fn overrides() {
        let config = PlannerConfig::from_lookup(lookup(&[
            ("PLANNER_BENCH_OUTPUT", "out/timings.csv"),
            ("PLANNER_BENCH_SIZES", "5, 100"),
            ("PLANNER_BENCH_DENSITY", "0.5"),
            ("PLANNER_BENCH_SEED", "9")
        ])).unwrap();

        assert_eq!(config, PlannerConfig {
            bench_output: "out/timings.csv".to_string(),
            bench_sizes: vec![5, 100],
            bench_density: 0.5,
            bench_seed: 9
        });
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            PlannerConfig::from_lookup(lookup(&[("PLANNER_BENCH_SIZES", "5,many")])),
            Err(PlannerError::Config { key: "PLANNER_BENCH_SIZES", .. })
        ));
        assert!(PlannerConfig::from_lookup(lookup(&[("PLANNER_BENCH_DENSITY", "1.5")])).is_err());
        assert!(PlannerConfig::from_lookup(lookup(&[("PLANNER_BENCH_SEED", "-1")])).is_err());
    }
}
