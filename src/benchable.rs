use crate::{error::PlannerError, types::{CostVector, Journey, Minutes, Schedule, Vertex}};

pub trait Benchable<'a> {
    fn new(schedule: &'a Schedule) -> Self where Self: Sized;
    fn name(&self) -> &'static str;

    /// Earliest arrival at every station when leaving `source` at `start_time`.
    fn earliest_arrivals(&self, source: Vertex, start_time: Minutes) -> Result<CostVector, PlannerError>;

    /// `Ok(None)` when `target` cannot be reached at all.
    fn find_earliest_arrival(&self, source: Vertex, target: Vertex, start_time: Minutes) -> Result<Option<Journey>, PlannerError> {
        let costs = self.earliest_arrivals(source, start_time)?;
        if target >= costs.len() {
            return Err(PlannerError::VertexOutOfRange { vertex: target, size: costs.len() });
        }

        Ok(costs.get(target).map(|arrival| Journey { source, target, start_time, arrival }))
    }
}
