use log::{debug, trace};
use ndarray::Array2;

use crate::{algorithms::min_cost::select_next, benchable::Benchable, error::PlannerError};
use crate::types::{CostVector, Minutes, ProcessedSet, Schedule, Vertex};

/// Time-dependent Dijkstra selecting the next station with a linear scan, O(N^2) on the dense matrices.
#[derive(Debug)]
pub struct TDMatrixScan<'a> {
    schedule: &'a Schedule
}

impl<'a> Benchable<'a> for TDMatrixScan<'a> {
    fn name(&self) -> &'static str {
        "Time-dependent Dijkstra with linear scan"
    }

    fn new(schedule: &'a Schedule) -> Self {
        TDMatrixScan { schedule }
    }

    fn earliest_arrivals(&self, source: Vertex, start_time: Minutes) -> Result<CostVector, PlannerError> {
        self.schedule.check_vertex(source)?;

        let size = self.schedule.size();
        let mut costs = CostVector::with_source(size, source, start_time);
        let mut processed = ProcessedSet::new(size);

        for _ in 1..size {
            let u = match select_next(&costs, &processed) {
                Some(u) => u,
                None => break
            };
            processed.mark(u);

            let cost_u = match costs.get(u) {
                Some(cost) => cost,
                None => {
                    trace!("Station {} is unreachable", u);
                    continue;
                }
            };
            debug!("Station {} reached at {}", u, cost_u);

            for v in 0..size {
                if processed.contains(v) {
                    continue;
                }

                // Arrivals past the end of representable time never improve anything
                if let Some(arrival) = self.schedule.edge(u, v).and_then(|edge| edge.arrival_from(cost_u)) {
                    if costs.improves(v, arrival) {
                        trace!("Improved station {} to {} via {}", v, arrival, u);
                        costs.set(v, arrival);
                    }
                }
            }
        }

        Ok(costs)
    }
}

/// Minutes between `start_time` and the fastest arrival at `target`, `None` when there is no route.
pub fn compute_fastest_arrival(
    source: Vertex,
    target: Vertex,
    start_time: Minutes,
    duration: Array2<Minutes>,
    first_departure: Array2<Minutes>,
    frequency: Array2<Minutes>
) -> Result<Option<Minutes>, PlannerError> {
    let schedule = Schedule::new(duration, first_departure, frequency)?;
    let journey = TDMatrixScan::new(&schedule).find_earliest_arrival(source, target, start_time)?;

    Ok(journey.map(|journey| journey.elapsed()))
}

alg_test!(TDMatrixScan);
