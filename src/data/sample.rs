// The nine station sample network. The same matrix doubles as the weights of the
// constant network and as the durations, first departures and frequencies of the schedule.

use lazy_static::lazy_static;
use ndarray::{arr2, Array2};

use crate::{error::PlannerError, types::{Minutes, Schedule, WeightMatrix}};

lazy_static! {
    static ref SAMPLE_MATRIX: Array2<Minutes> = arr2(&[
        [0, 4, 0, 0, 0, 0, 0, 8, 0],
        [4, 0, 8, 0, 0, 0, 0, 11, 0],
        [0, 8, 0, 7, 0, 4, 0, 0, 2],
        [0, 0, 7, 0, 9, 14, 0, 0, 0],
        [0, 0, 0, 9, 0, 10, 0, 0, 0],
        [0, 0, 4, 14, 10, 0, 2, 0, 0],
        [0, 0, 0, 0, 0, 2, 0, 1, 6],
        [8, 11, 0, 0, 0, 0, 1, 0, 7],
        [0, 0, 2, 0, 0, 0, 6, 7, 0]
    ]);
}

pub fn sample_matrix() -> Array2<Minutes> {
    SAMPLE_MATRIX.clone()
}

pub fn sample_weights() -> Result<WeightMatrix, PlannerError> {
    WeightMatrix::new(sample_matrix())
}

pub fn sample_schedule() -> Result<Schedule, PlannerError> {
    Schedule::new(sample_matrix(), sample_matrix(), sample_matrix())
}
