// This file defines the network and result types shared by all routers.
// A network is stored as dense N x N matrices indexed by (from, to) station.
// A time-dependent network (Schedule) has three of them: ride durations, first departures and frequencies.
// A constant network (WeightMatrix) has a single weight per edge.
// In both, a cell of 0 in the duration/weight matrix means there is no edge.
// All times are whole minutes since the 05:30 epoch.

use std::fmt;

use chrono::{Duration, NaiveTime};
use ndarray::Array2;
use serde::Serialize;

use crate::error::PlannerError;

pub type Minutes = i64;
pub type Vertex = usize;

const EPOCH_HOUR: u32 = 5;
const EPOCH_MINUTE: u32 = 30;
const MINUTES_PER_DAY: i64 = 24 * 60;
const SECONDS_PER_DAY: i64 = MINUTES_PER_DAY * 60;

/// Formats minutes since the epoch as a wall clock time, e.g. `08:00` or `00:15 (+1 days)`.
pub fn clock_time(minutes: Minutes) -> String {
    let epoch = NaiveTime::from_hms(EPOCH_HOUR, EPOCH_MINUTE, 0);
    // Whole days are split off first, chrono durations only reach so far
    let (time, wrapped) = epoch.overflowing_add_signed(Duration::minutes(minutes.rem_euclid(MINUTES_PER_DAY)));

    match minutes.div_euclid(MINUTES_PER_DAY) + wrapped / SECONDS_PER_DAY {
        0 => time.format("%H:%M").to_string(),
        days => format!("{} ({:+} days)", time.format("%H:%M"), days)
    }
}

fn square_size(matrix: &'static str, values: &Array2<Minutes>) -> Result<usize, PlannerError> {
    let (rows, cols) = values.dim();
    if rows != cols {
        return Err(PlannerError::NotSquare { matrix, rows, cols });
    }

    Ok(rows)
}

fn check_non_negative(matrix: &'static str, values: &Array2<Minutes>) -> Result<(), PlannerError> {
    match values.indexed_iter().find(|&(_, &value)| value < 0) {
        Some(((from, to), &value)) => Err(PlannerError::NegativeValue { matrix, from, to, value }),
        None => Ok(())
    }
}

fn check_vertex(vertex: Vertex, size: usize) -> Result<(), PlannerError> {
    if vertex >= size {
        return Err(PlannerError::VertexOutOfRange { vertex, size });
    }

    Ok(())
}

/// Constant weight network, `weights[[u, v]] == 0` means no edge.
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    weights: Array2<Minutes>
}

impl WeightMatrix {
    pub fn new(weights: Array2<Minutes>) -> Result<Self, PlannerError> {
        square_size("weight", &weights)?;
        check_non_negative("weight", &weights)?;

        Ok(WeightMatrix { weights })
    }

    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    pub fn weight(&self, from: Vertex, to: Vertex) -> Option<Minutes> {
        match self.weights[[from, to]] {
            0 => None,
            weight => Some(weight)
        }
    }

    pub fn check_vertex(&self, vertex: Vertex) -> Result<(), PlannerError> {
        check_vertex(vertex, self.size())
    }
}

/// The timetable of a single directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSchedule {
    pub duration: Minutes,
    pub first_departure: Minutes,
    /// 0 means a vehicle is always waiting
    pub frequency: Minutes
}

/// Periodic timetable of a network.
#[derive(Debug, Clone)]
pub struct Schedule {
    duration: Array2<Minutes>,
    first_departure: Array2<Minutes>,
    frequency: Array2<Minutes>
}

impl Schedule {
    pub fn new(duration: Array2<Minutes>, first_departure: Array2<Minutes>, frequency: Array2<Minutes>) -> Result<Self, PlannerError> {
        let size = square_size("duration", &duration)?;

        for &(matrix, values) in &[("first departure", &first_departure), ("frequency", &frequency)] {
            let found = square_size(matrix, values)?;
            if found != size {
                return Err(PlannerError::DimensionMismatch { matrix, expected: size, found });
            }
        }

        // First departures may lie before the epoch, durations and frequencies may not.
        check_non_negative("duration", &duration)?;
        check_non_negative("frequency", &frequency)?;

        Ok(Schedule { duration, first_departure, frequency })
    }

    pub fn size(&self) -> usize {
        self.duration.nrows()
    }

    /// Raw timetable cell, regardless of whether the edge exists.
    pub fn cell(&self, from: Vertex, to: Vertex) -> EdgeSchedule {
        EdgeSchedule {
            duration: self.duration[[from, to]],
            first_departure: self.first_departure[[from, to]],
            frequency: self.frequency[[from, to]]
        }
    }

    pub fn edge(&self, from: Vertex, to: Vertex) -> Option<EdgeSchedule> {
        Some(self.cell(from, to)).filter(|edge| edge.duration != 0)
    }

    pub fn check_vertex(&self, vertex: Vertex) -> Result<(), PlannerError> {
        check_vertex(vertex, self.size())
    }
}

/// Best known cost per vertex, `None` while a vertex is unreached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostVector(Vec<Option<Minutes>>);

impl CostVector {
    pub fn unreached(size: usize) -> Self {
        CostVector(vec![None; size])
    }

    pub fn with_source(size: usize, source: Vertex, cost: Minutes) -> Self {
        let mut costs = CostVector::unreached(size);
        costs.set(source, cost);
        costs
    }

    pub fn get(&self, vertex: Vertex) -> Option<Minutes> {
        self.0[vertex]
    }

    pub fn set(&mut self, vertex: Vertex, cost: Minutes) {
        self.0[vertex] = Some(cost);
    }

    /// Whether `candidate` is strictly better than what is known for `vertex`.
    pub fn improves(&self, vertex: Vertex, candidate: Minutes) -> bool {
        self.0[vertex].map_or(true, |current| candidate < current)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Option<Minutes>] {
        &self.0
    }
}

impl fmt::Display for CostVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex Distances (time) from Source")?;
        for (vertex, cost) in self.0.iter().enumerate() {
            match cost {
                Some(cost) => write!(f, "\n{}: {} minutes", vertex, cost)?,
                None => write!(f, "\n{}: unreachable", vertex)?
            }
        }

        Ok(())
    }
}

/// Vertices whose cost is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedSet(Vec<bool>);

impl ProcessedSet {
    pub fn new(size: usize) -> Self {
        ProcessedSet(vec![false; size])
    }

    pub fn mark(&mut self, vertex: Vertex) {
        self.0[vertex] = true;
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.0[vertex]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Fastest way to get from `source` to `target` when leaving at `start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Journey {
    pub source: Vertex,
    pub target: Vertex,
    pub start_time: Minutes,
    pub arrival: Minutes
}

impl Journey {
    pub fn elapsed(&self) -> Minutes {
        self.arrival.saturating_sub(self.start_time)
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f, "Leave station {} at {} and arrive at station {} at {}, taking {} minutes",
            self.source, clock_time(self.start_time), self.target, clock_time(self.arrival), self.elapsed()
        )
    }
}
