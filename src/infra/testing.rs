use thiserror::Error;

use crate::{
    algo::ExtremalPaths,
    core::{
        id::{EdgeId, VertexId},
        Weight,
    },
    graph::Graph,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    #[error("graph has a cycle, {0} vertices could not be topologically sorted")]
    Cyclic(usize),
    #[error("start vertex {0} does not have zero label")]
    StartNotZero(VertexId),
    #[error("edge {0} can still be relaxed")]
    NotFixedPoint(EdgeId),
    #[error("reachable vertex {0} has no path")]
    MissingPath(VertexId),
    #[error("unreachable vertex {0} has a non-empty path")]
    UnexpectedPath(VertexId),
    #[error("path to vertex {0} is not a chain of edges from the start")]
    BrokenPath(VertexId),
    #[error("total weight of path to vertex {0} differs from its label")]
    PathWeightMismatch(VertexId),
}

/// Verifies that the graph has no directed cycle using Kahn's algorithm, which
/// is independent of the depth-first search used by the cycle elimination.
pub fn check_acyclic<W>(graph: &Graph<W>) -> Result<(), CheckError> {
    let mut in_deg = vec![0usize; graph.vertex_count()];
    for edge in graph.edges() {
        in_deg[edge.dst.as_usize()] += 1;
    }

    // Does not need to be FIFO as the order of vertices with in degree 0 does
    // not matter.
    let mut queue = in_deg
        .iter()
        .enumerate()
        .filter(|(_, deg)| **deg == 0)
        .map(|(v, _)| v)
        .collect::<Vec<_>>();

    let out = graph.storage().out_edges();
    let mut sorted = 0;

    while let Some(u) = queue.pop() {
        sorted += 1;
        for (_, v) in &out[u] {
            in_deg[v.as_usize()] -= 1;
            if in_deg[v.as_usize()] == 0 {
                queue.push(v.as_usize());
            }
        }
    }

    if sorted == graph.vertex_count() {
        Ok(())
    } else {
        Err(CheckError::Cyclic(graph.vertex_count() - sorted))
    }
}

/// Verifies that no edge can be relaxed any further and that the start has
/// zero label.
pub fn check_fixed_point<W: Weight>(paths: &ExtremalPaths<'_, W>) -> Result<(), CheckError> {
    let graph = paths.graph();
    let mode = paths.mode();
    let start = paths.start();

    if paths.dist(start) != Some(&W::zero()) {
        return Err(CheckError::StartNotZero(start));
    }

    for edge in graph.edges() {
        let Some(dist_u) = paths.dist(edge.src) else {
            continue;
        };

        if edge.dst == start {
            continue;
        }

        let Some(candidate) = dist_u.combine(edge.weight) else {
            continue;
        };
        if mode.improves(&candidate, &paths[edge.dst]) {
            return Err(CheckError::NotFixedPoint(edge.id));
        }
    }

    Ok(())
}

/// Verifies that reachable vertices have a path from the start whose total
/// weight equals the label and that unreachable vertices have none.
pub fn check_paths<W: Weight>(paths: &ExtremalPaths<'_, W>) -> Result<(), CheckError> {
    let graph = paths.graph();
    let start = paths.start();

    for vertex in graph.vertex_ids() {
        let path = paths
            .path(vertex)
            .map_err(|_| CheckError::BrokenPath(vertex))?;

        match (paths.dist(vertex), path) {
            (Some(dist), Some(path)) => {
                let chained = path
                    .steps
                    .windows(2)
                    .all(|pair| pair[0].to == pair[1].from);
                let from_start = path.steps.first().map_or(true, |step| step.from == start);
                let to_vertex = path.steps.last().map_or(vertex == start, |step| step.to == vertex);

                if !chained || !from_start || !to_vertex {
                    return Err(CheckError::BrokenPath(vertex));
                }

                if &path.total_weight != dist {
                    return Err(CheckError::PathWeightMismatch(vertex));
                }
            }
            (Some(_), None) => return Err(CheckError::MissingPath(vertex)),
            (None, Some(_)) => return Err(CheckError::UnexpectedPath(vertex)),
            (None, None) => {
                if !paths
                    .reconstruct_path(vertex)
                    .map_err(|_| CheckError::BrokenPath(vertex))?
                    .is_empty()
                {
                    return Err(CheckError::UnexpectedPath(vertex));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::Mode;

    use super::*;

    #[test]
    fn acyclic_check() {
        let mut graph = Graph::new(3, Mode::Maximize);
        graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        assert_eq!(check_acyclic(&graph), Ok(()));

        graph.add_edge(2, 1, 1);
        assert_matches!(check_acyclic(&graph), Err(CheckError::Cyclic(2)));
    }

    #[test]
    fn acyclic_check_self_loop() {
        let mut graph = Graph::new(2, Mode::Maximize);
        graph.add_edge(1, 1, 1);
        assert_matches!(check_acyclic(&graph), Err(CheckError::Cyclic(1)));
    }

    #[test]
    fn fixed_point_detects_unconverged() {
        let mut graph = Graph::new(3, Mode::Minimize);
        // Edges in reverse order need one sweep each.
        graph.extend_with_edges([(1, 2, 1), (0, 1, 1)]);

        let paths = graph.paths().max_sweeps(1).run(0).unwrap();
        assert_matches!(check_fixed_point(&paths), Err(CheckError::NotFixedPoint(_)));

        let paths = graph.find_paths(0).unwrap();
        assert_eq!(check_fixed_point(&paths), Ok(()));
        assert_eq!(check_paths(&paths), Ok(()));
    }
}
