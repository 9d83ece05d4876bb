//! Break all directed cycles of a graph by removing edges.
//!
//! Relaxation in [maximize](crate::core::Mode::Maximize) mode keeps improving
//! labels around any cycle with positive total weight and never reaches a
//! fixed point. Elimination turns the graph into a DAG beforehand: it
//! repeatedly [finds a cycle](crate::algo::Cycle) and removes the cycle edge
//! with the smallest weight (the first one in the edge sequence among equal
//! weights), until no cycle remains. Every round removes exactly one edge, so
//! at most `edge_count` rounds are performed.
//!
//! The input graph is never mutated. The result is a new graph along with the
//! removed edges in the order of removal.
//!
//! # Examples
//!
//! ```
//! use extremal::{
//!     algo::{is_cyclic, EliminateCycles},
//!     Graph,
//! };
//!
//! let mut graph = Graph::new_maximize(3);
//! graph.extend_with_edges([(0, 1, 4), (1, 2, 3), (2, 0, 5)]);
//!
//! let elimination = EliminateCycles::on(&graph).run();
//!
//! assert!(!is_cyclic(&elimination.graph));
//! assert_eq!(elimination.removed.len(), 1);
//! assert_eq!(elimination.removed[0].weight, 3);
//! ```

use tracing::debug;

use crate::{
    core::{Edge, Weight},
    graph::Graph,
};

use super::Cycle;

/// Outcome of [`EliminateCycles`].
#[derive(Debug, Clone, PartialEq)]
pub struct CycleElimination<W> {
    /// The acyclic graph.
    pub graph: Graph<W>,
    /// Removed edges, in the order of removal.
    pub removed: Vec<Edge<W>>,
}

impl<W> CycleElimination<W> {
    /// Returns `true` if no edge had to be removed.
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Builder for the cycle elimination.
pub struct EliminateCycles<'a, W> {
    graph: &'a Graph<W>,
    only_maximize: bool,
}

impl<'a, W> EliminateCycles<'a, W> {
    pub fn on(graph: &'a Graph<W>) -> Self {
        Self {
            graph,
            only_maximize: false,
        }
    }

    /// Leaves graphs in [minimize](crate::core::Mode::Minimize) mode
    /// untouched.
    ///
    /// Shortest paths are well defined on graphs with cycles as long as there
    /// is no negative cycle, so the elimination is required only for the
    /// maximize mode.
    pub fn only_maximize(self) -> Self {
        Self {
            only_maximize: true,
            ..self
        }
    }
}

impl<'a, W: Weight> EliminateCycles<'a, W> {
    pub fn run(self) -> CycleElimination<W> {
        let mut graph = self.graph.clone();
        let mut removed = Vec::new();

        if self.only_maximize && !graph.mode().is_maximize() {
            return CycleElimination { graph, removed };
        }

        while let Some(cycle) = Cycle::on(&graph).run() {
            debug!(vertices = ?cycle.vertices, "cycle found");

            let Some((id, _)) = cycle.min_weight_edge(&graph) else {
                break;
            };

            if let Some(edge) = graph.take_edge(id) {
                debug!(
                    src = %edge.src,
                    dst = %edge.dst,
                    weight = ?edge.weight,
                    cycle_len = cycle.len(),
                    "removed minimum weight edge of a cycle"
                );
                removed.push(edge);
            }
        }

        debug!(
            removed = removed.len(),
            remaining = graph.edge_count(),
            "cycle elimination finished"
        );

        CycleElimination { graph, removed }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::is_cyclic,
        core::{id::VertexId, Mode},
        infra::{proptest::graph_strategy, testing::check_acyclic},
    };

    use super::*;

    fn edge(src: usize, dst: usize, weight: i32) -> Edge<i32> {
        Edge {
            src: VertexId::new(src),
            dst: VertexId::new(dst),
            weight,
        }
    }

    fn edges(graph: &Graph<i32>) -> Vec<(usize, usize, i32)> {
        graph
            .edges()
            .map(|edge| (edge.src.as_usize(), edge.dst.as_usize(), *edge.weight))
            .collect()
    }

    #[test]
    fn three_cycle_equal_weights() {
        let mut graph = Graph::new_maximize(3);
        graph.extend_with_edges([(0, 1, 4), (1, 2, 4), (2, 0, 4)]);

        let elimination = EliminateCycles::on(&graph).run();

        // Ties are broken by the position in the edge sequence.
        assert_eq!(elimination.removed, vec![edge(0, 1, 4)]);
        assert_eq!(edges(&elimination.graph), vec![(1, 2, 4), (2, 0, 4)]);
        assert!(!is_cyclic(&elimination.graph));
    }

    #[test]
    fn removes_minimum_weight_edge() {
        let mut graph = Graph::new_maximize(3);
        graph.extend_with_edges([(0, 1, 7), (1, 2, 2), (2, 0, 9)]);

        let elimination = EliminateCycles::on(&graph).run();

        assert_eq!(elimination.removed, vec![edge(1, 2, 2)]);
        assert_eq!(edges(&elimination.graph), vec![(0, 1, 7), (2, 0, 9)]);
    }

    #[test]
    fn parallel_edge_survives() {
        let mut graph = Graph::new_maximize(2);
        graph.extend_with_edges([(0, 1, 1), (0, 1, 8), (1, 0, 5)]);

        let elimination = EliminateCycles::on(&graph).run();

        // Only one edge is removed per round. The parallel edge closes the
        // cycle again and is handled in the next round.
        assert_eq!(elimination.removed, vec![edge(0, 1, 1), edge(1, 0, 5)]);
        assert_eq!(edges(&elimination.graph), vec![(0, 1, 8)]);
    }

    #[test]
    fn self_loops_removed() {
        let mut graph = Graph::new_maximize(2);
        graph.extend_with_edges([(0, 0, 3), (0, 1, 1), (1, 1, -2)]);

        let elimination = EliminateCycles::on(&graph).run();

        assert_eq!(elimination.removed, vec![edge(0, 0, 3), edge(1, 1, -2)]);
        assert_eq!(edges(&elimination.graph), vec![(0, 1, 1)]);
    }

    #[test]
    fn overlapping_cycles() {
        let mut graph = Graph::new_maximize(4);
        graph.extend_with_edges([(0, 1, 5), (1, 2, 6), (2, 0, 1), (2, 3, 2), (3, 1, 3)]);

        let elimination = EliminateCycles::on(&graph).run();

        // First cycle 0 -> 1 -> 2 -> 0 loses (2, 0), then 1 -> 2 -> 3 -> 1
        // loses (2, 3).
        assert_eq!(elimination.removed, vec![edge(2, 0, 1), edge(2, 3, 2)]);
        check_acyclic(&elimination.graph).unwrap();
    }

    #[test]
    fn acyclic_untouched() {
        let mut graph = Graph::new_maximize(3);
        graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (0, 2, 1)]);

        let elimination = EliminateCycles::on(&graph).run();

        assert!(elimination.is_noop());
        assert_eq!(elimination.graph, graph);
    }

    #[test]
    fn empty_graph_noop() {
        let graph = Graph::<i32>::new_maximize(0);
        assert!(EliminateCycles::on(&graph).run().is_noop());
    }

    #[test]
    fn only_maximize_skips_minimize() {
        let mut graph = Graph::new(2, Mode::Minimize);
        graph.extend_with_edges([(0, 1, 1), (1, 0, 1)]);

        assert!(EliminateCycles::on(&graph).only_maximize().run().is_noop());
        assert!(!EliminateCycles::on(&graph).run().is_noop());
    }

    #[test]
    fn idempotent() {
        let mut graph = Graph::new_maximize(4);
        graph.extend_with_edges([(0, 1, 2), (1, 0, 3), (1, 2, 1), (2, 3, 4), (3, 1, 6)]);

        let once = EliminateCycles::on(&graph).run().graph;
        let twice = EliminateCycles::on(&once).run();

        assert!(twice.is_noop());
        assert_eq!(twice.graph, once);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_eliminate_cycles_acyclic(graph in graph_strategy(Mode::Maximize, -50i32..50)) {
            let elimination = EliminateCycles::on(&graph).run();

            prop_assert!(check_acyclic(&elimination.graph).is_ok());
            prop_assert_eq!(
                elimination.graph.edge_count() + elimination.removed.len(),
                graph.edge_count()
            );
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_eliminate_cycles_idempotent(graph in graph_strategy(Mode::Maximize, -50i32..50)) {
            let once = EliminateCycles::on(&graph).run().graph;
            let twice = EliminateCycles::on(&once).run();

            prop_assert!(twice.is_noop());
            prop_assert_eq!(twice.graph, once);
        }
    }
}
