//! One-shot computation of the extremal path between two vertices.
//!
//! # Examples
//!
//! ```
//! use extremal::{algo::solve, Graph};
//!
//! let mut graph = Graph::new_maximize(3);
//! graph.extend_with_edges([(0, 1, 4), (1, 2, 3), (2, 1, 1), (0, 2, 1)]);
//!
//! let solution = solve(&graph, 0, 2).unwrap();
//!
//! assert_eq!(solution.removed.len(), 1);
//! assert_eq!(solution.labels, vec![Some(0), Some(4), Some(7)]);
//! assert_eq!(solution.path.unwrap().total_weight, 7);
//! ```

use crate::{
    core::{
        id::{AsId, VertexId},
        Edge, Error, Weight,
    },
    graph::Graph,
};

use super::{EliminateCycles, ExtremalPaths, Path};

/// Owned result of [`solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<W> {
    /// Labels indexed by vertex, `None` for vertices unreachable from the
    /// start.
    pub labels: Vec<Option<W>>,
    /// Path from the start to the end, `None` if the end is unreachable.
    pub path: Option<Path<W>>,
    /// Edges removed by the cycle elimination, in the order of removal.
    pub removed: Vec<Edge<W>>,
    /// Whether the relaxation reached a fixed point.
    pub converged: bool,
}

/// Finds the extremal path from `start` to `end`.
///
/// The graph is copied, cycles are eliminated if the graph is in
/// [maximize](crate::core::Mode::Maximize) mode, labels are computed from
/// `start` and the path to `end` is reconstructed. The graph itself is left
/// untouched.
///
/// Fails with [`Error::OutOfRange`] if `start` or `end` is not a vertex of
/// the graph.
pub fn solve<W, VI>(graph: &Graph<W>, start: VI, end: VI) -> Result<Solution<W>, Error>
where
    W: Weight,
    VI: AsId<VertexId>,
{
    let start = start.as_id();
    let end = end.as_id();

    graph.storage().check_vertex(&start)?;
    graph.storage().check_vertex(&end)?;

    let elimination = EliminateCycles::on(graph).only_maximize().run();
    let graph = &elimination.graph;

    let paths = ExtremalPaths::on(graph).run(start)?;
    let path = paths.path(end)?;
    let labels = paths.labels().map(|(_, dist)| dist.cloned()).collect();

    Ok(Solution {
        labels,
        path,
        converged: paths.converged(),
        removed: elimination.removed,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::{Mode, Weight};

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn minimize_keeps_cycles() {
        let mut graph = Graph::new(3, Mode::Minimize);
        graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);

        let solution = solve(&graph, 0, 2).unwrap();

        assert!(solution.removed.is_empty());
        assert!(solution.converged);
        assert_eq!(solution.labels, vec![Some(0), Some(1), Some(2)]);

        let path = solution.path.unwrap();
        assert_eq!(path.vertices().collect::<Vec<_>>(), vec![v(0), v(1), v(2)]);
        assert_eq!(path.total_weight, 2);
    }

    #[test]
    fn maximize_eliminates_cycles() {
        let mut graph = Graph::new(3, Mode::Maximize);
        graph.extend_with_edges([(0, 1, 5), (1, 2, 5), (2, 1, 1)]);

        let solution = solve(&graph, 0, 2).unwrap();

        assert_eq!(
            solution.removed,
            vec![Edge {
                src: v(2),
                dst: v(1),
                weight: 1
            }]
        );
        assert!(solution.converged);
        assert_eq!(solution.labels, vec![Some(0), Some(5), Some(10)]);
        assert_eq!(solution.path.map(|path| path.total_weight), Some(10));

        // The input graph is not touched.
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn unreachable_end() {
        let mut graph = Graph::new(3, Mode::Maximize);
        graph.add_edge(0, 1, 2.5);

        let solution = solve(&graph, 0, 2).unwrap();

        assert_eq!(solution.labels, vec![Some(0.0), Some(2.5), None]);
        assert_eq!(solution.path, None);
    }

    #[test]
    fn end_is_start() {
        let mut graph = Graph::new(2, Mode::Minimize);
        graph.add_edge(0, 1, 3);

        let solution = solve(&graph, 1, 1).unwrap();

        assert_eq!(solution.labels, vec![None, Some(0)]);
        assert_eq!(solution.path, Some(Path::default()));
    }

    #[test]
    fn out_of_range() {
        let graph = Graph::<i32>::new(2, Mode::Minimize);

        assert_matches!(
            solve(&graph, 2, 0),
            Err(Error::OutOfRange { vertex, .. }) if vertex == v(2)
        );
        assert_matches!(
            solve(&graph, 0, 5),
            Err(Error::OutOfRange { vertex, .. }) if vertex == v(5)
        );
    }

    #[test]
    fn infinite_weights_are_unreachable() {
        let mut graph = Graph::new(2, Mode::Minimize);
        graph.add_edge(0, 1, f64::inf());

        let solution = solve(&graph, 0, 1).unwrap();

        assert_eq!(solution.labels, vec![Some(0.0), None]);
        assert_eq!(solution.path, None);
    }
}
