use tracing::trace;

use crate::{
    core::{id::VertexId, Weight},
    graph::Graph,
};

use super::ExtremalPaths;

pub fn bellman_ford<W>(
    graph: &Graph<W>,
    start: VertexId,
    max_sweeps: usize,
) -> ExtremalPaths<'_, W>
where
    W: Weight,
{
    let mode = graph.mode();
    let sentinel = mode.sentinel::<W>();

    let mut dist = vec![sentinel.clone(); graph.vertex_count()];
    let mut pred = vec![None; graph.vertex_count()];

    dist[start.as_usize()] = W::zero();

    let mut sweeps = 0;
    let mut converged = false;

    while sweeps < max_sweeps {
        sweeps += 1;
        let mut relaxed = false;

        for edge in graph.edges() {
            let u = edge.src.as_usize();
            let v = edge.dst.as_usize();

            // The start keeps its zero label.
            if edge.dst == start || dist[u] == sentinel {
                continue;
            }

            // Sums that do not fit the weight type are not relaxed.
            let Some(next_dist) = dist[u].combine(edge.weight) else {
                continue;
            };

            // Relax if better.
            if mode.improves(&next_dist, &dist[v]) {
                dist[v] = next_dist;
                pred[v] = Some(edge.id);
                relaxed = true;
            }
        }

        trace!(sweep = sweeps, relaxed, "relaxation sweep");

        // If no label was improved, then subsequent sweeps would not improve
        // anything either.
        if !relaxed {
            converged = true;
            break;
        }
    }

    ExtremalPaths {
        graph,
        start,
        dist,
        pred,
        sweeps,
        converged,
    }
}
