use ndarray::Array2;
use rand::Rng;

use crate::{error::PlannerError, types::{Minutes, Schedule}};

pub const MAX_DURATION: Minutes = 30;
pub const MAX_FIRST_DEPARTURE: Minutes = 60;
pub const MAX_FREQUENCY: Minutes = 20;

/// Generates a network where every ordered pair of distinct stations is connected with probability `density`.
pub fn random_schedule<R: Rng>(rng: &mut R, size: usize, density: f64) -> Result<Schedule, PlannerError> {
    let mut duration = Array2::zeros((size, size));
    let mut first_departure = Array2::zeros((size, size));
    let mut frequency = Array2::zeros((size, size));

    for from in 0..size {
        for to in 0..size {
            if from == to || !rng.gen_bool(density) {
                continue;
            }

            duration[[from, to]] = rng.gen_range(1..=MAX_DURATION);
            first_departure[[from, to]] = rng.gen_range(0..=MAX_FIRST_DEPARTURE);
            frequency[[from, to]] = rng.gen_range(0..=MAX_FREQUENCY);
        }
    }

    Schedule::new(duration, first_departure, frequency)
}
