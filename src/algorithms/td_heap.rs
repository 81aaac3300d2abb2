use std::collections::BinaryHeap;
use std::cmp::Ordering;

use log::{debug, trace};

use crate::{benchable::Benchable, error::PlannerError};
use crate::types::{CostVector, Journey, Minutes, ProcessedSet, Schedule, Vertex};

// Dijkstra implementation is mainly derived from example at: https://doc.rust-lang.org/std/collections/binary_heap/
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct State {
    cost: Minutes,
    station: Vertex,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for State {
    fn cmp(&self, other: &State) -> Ordering {
        // Both orderings are flipped, so on equal cost the lowest station is popped first
        // just like the linear scan picks it.
        other.cost.cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for State {
    fn partial_cmp(&self, other: &State) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-dependent Dijkstra on a binary heap, stops as soon as the target is settled.
#[derive(Debug)]
pub struct TDMatrixHeap<'a> {
    schedule: &'a Schedule
}

impl<'a> TDMatrixHeap<'a> {
    fn search(&self, source: Vertex, start_time: Minutes, target: Option<Vertex>) -> Result<CostVector, PlannerError> {
        self.schedule.check_vertex(source)?;

        let size = self.schedule.size();
        let mut costs = CostVector::with_source(size, source, start_time);
        let mut processed = ProcessedSet::new(size);
        let mut heap = BinaryHeap::new();

        heap.push(State { cost: start_time, station: source });

        while let Some(State { cost, station }) = heap.pop() {
            // Important as we may have already found a better way
            if processed.contains(station) { continue; }
            processed.mark(station);
            debug!("Station {} reached at {}", station, cost);

            if Some(station) == target {
                break;
            }

            for v in 0..size {
                if processed.contains(v) {
                    continue;
                }

                if let Some(arrival) = self.schedule.edge(station, v).and_then(|edge| edge.arrival_from(cost)) {
                    if costs.improves(v, arrival) {
                        trace!("Improved station {} to {} via {}", v, arrival, station);
                        costs.set(v, arrival);
                        heap.push(State { cost: arrival, station: v });
                    }
                }
            }
        };

        Ok(costs)
    }
}

impl<'a> Benchable<'a> for TDMatrixHeap<'a> {
    fn name(&self) -> &'static str {
        "Time-dependent Dijkstra with binary heap"
    }

    fn new(schedule: &'a Schedule) -> Self {
        TDMatrixHeap { schedule }
    }

    fn earliest_arrivals(&self, source: Vertex, start_time: Minutes) -> Result<CostVector, PlannerError> {
        self.search(source, start_time, None)
    }

    fn find_earliest_arrival(&self, source: Vertex, target: Vertex, start_time: Minutes) -> Result<Option<Journey>, PlannerError> {
        self.schedule.check_vertex(target)?;
        let costs = self.search(source, start_time, Some(target))?;

        Ok(costs.get(target).map(|arrival| Journey { source, target, start_time, arrival }))
    }
}

alg_test!(TDMatrixHeap);
