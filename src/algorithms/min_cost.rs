use crate::types::{CostVector, ProcessedSet, Vertex};

/// Finds the unprocessed vertex with the lowest known cost, the lowest index wins a tie.
/// Unreached vertices rank behind every reached one.
/// Returns `None` only once every vertex is processed.
pub fn select_next(costs: &CostVector, processed: &ProcessedSet) -> Option<Vertex> {
    costs.as_slice().iter()
        .zip(processed.as_slice())
        .enumerate()
        .filter(|&(_, (_, &done))| !done)
        .min_by_key(|&(vertex, (cost, _))| (cost.is_none(), *cost, vertex))
        .map(|(vertex, _)| vertex)
}
