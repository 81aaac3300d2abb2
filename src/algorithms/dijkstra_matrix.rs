use crate::{algorithms::min_cost::select_next, error::PlannerError, types::{CostVector, ProcessedSet, Vertex, WeightMatrix}};

/// Shortest distance from `source` to every vertex of a constant weight network.
pub fn shortest_times(graph: &WeightMatrix, source: Vertex) -> Result<CostVector, PlannerError> {
    graph.check_vertex(source)?;

    let size = graph.size();
    let mut costs = CostVector::with_source(size, source, 0);
    let mut processed = ProcessedSet::new(size);

    for _ in 1..size {
        let u = match select_next(&costs, &processed) {
            Some(u) => u,
            None => break
        };
        processed.mark(u);

        let cost_u = match costs.get(u) {
            Some(cost) => cost,
            None => continue
        };

        for v in 0..size {
            if processed.contains(v) {
                continue;
            }

            // Distances that overflow are treated as unreachable
            if let Some(cost) = graph.weight(u, v).and_then(|weight| cost_u.checked_add(weight)) {
                if costs.improves(v, cost) {
                    costs.set(v, cost);
                }
            }
        }
    }

    Ok(costs)
}
