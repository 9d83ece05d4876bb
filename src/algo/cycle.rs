//! Find a [cycle] in a graph.
//!
//! See available parameters [here](CycleBuilder#implementations).
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use extremal::{algo::is_cyclic, Graph};
//!
//! let mut graph = Graph::new_maximize(4);
//!
//! graph.add_edge(0, 1, 1);
//! graph.add_edge(1, 2, 1);
//! graph.add_edge(2, 3, 1);
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(3, 1, 1);
//!
//! assert!(is_cyclic(&graph));
//! ```

use crate::{
    core::id::{EdgeId, VertexId},
    graph::Graph,
};

mod builder;
mod dfs;

pub use builder::CycleBuilder;

/// Directed cycle in a graph.
///
/// `edges[i]` goes from `vertices[i]` to `vertices[(i + 1) % len]`. For every
/// consecutive pair of vertices, the edge is the first one between them in the
/// sequence order of the graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

impl Cycle {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the cycle edge with the smallest weight, preferring the one
    /// that comes first in the edge sequence among equal weights.
    pub fn min_weight_edge<'g, W: PartialOrd>(
        &self,
        graph: &'g Graph<W>,
    ) -> Option<(EdgeId, &'g W)> {
        self.edges
            .iter()
            .filter_map(|id| graph.edge(id).map(|edge| (*id, edge.weight)))
            .fold(None, |best, (id, weight)| match best {
                None => Some((id, weight)),
                Some((best_id, best_weight)) => {
                    if weight < best_weight || (weight == best_weight && id < best_id) {
                        Some((id, weight))
                    } else {
                        Some((best_id, best_weight))
                    }
                }
            })
    }
}

/// Returns `true` if the graph contains a directed cycle. Self-loops count as
/// cycles.
pub fn is_cyclic<W>(graph: &Graph<W>) -> bool {
    Cycle::on(graph).run().is_some()
}
