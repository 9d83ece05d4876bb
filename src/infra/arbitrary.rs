use std::fmt;

use arbitrary::Arbitrary;

use crate::{
    core::{
        id::{EdgeId, VertexId},
        Edge, Error, Weight,
    },
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum GraphOp<W> {
    AddEdge(Index, Index, W),
    RemoveEdge(Index),
    ClearEdges,
    EliminateCycles,
    FindPaths(Index),
}

#[derive(Debug, PartialEq)]
pub enum GraphOpResult<W> {
    AddEdge(Result<EdgeId, Error>),
    RemoveEdge(Option<W>),
    ClearEdges,
    EliminateCycles(Vec<Edge<W>>),
    FindPaths(Result<bool, Error>),
}

impl<W: Weight> GraphOp<W> {
    /// Applies the operation on the graph.
    ///
    /// Indices are taken modulo the vertex or edge count, so that most
    /// operations hit existing elements. An empty graph still exercises the
    /// error paths.
    pub fn apply(self, graph: &mut Graph<W>) -> GraphOpResult<W> {
        let n = graph.vertex_count();
        let m = graph.edge_count();

        match self {
            GraphOp::AddEdge(src, dst, weight) => {
                let src = VertexId::new(src.get(n).unwrap_or(src.0));
                let dst = VertexId::new(dst.get(n).unwrap_or(dst.0));
                GraphOpResult::AddEdge(graph.try_add_edge(src, dst, weight))
            }
            GraphOp::RemoveEdge(index) => {
                let removed = index
                    .get(m)
                    .and_then(|index| graph.remove_edge(EdgeId::new(index)));
                GraphOpResult::RemoveEdge(removed)
            }
            GraphOp::ClearEdges => {
                graph.clear_edges();
                GraphOpResult::ClearEdges
            }
            GraphOp::EliminateCycles => {
                GraphOpResult::EliminateCycles(graph.eliminate_cycles_in_place())
            }
            GraphOp::FindPaths(start) => {
                let start = VertexId::new(start.get(n).unwrap_or(start.0));
                GraphOpResult::FindPaths(graph.find_paths(start).map(|paths| paths.converged()))
            }
        }
    }
}

pub struct GraphOpsSeq<W>(pub Vec<GraphOp<W>>);

impl<W> IntoIterator for GraphOpsSeq<W> {
    type Item = GraphOp<W>;
    type IntoIter = std::vec::IntoIter<GraphOp<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, W: Arbitrary<'a>> Arbitrary<'a> for GraphOpsSeq<W> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Vec::arbitrary(u).map(GraphOpsSeq)
    }

    fn arbitrary_take_rest(u: arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Vec::arbitrary_take_rest(u).map(GraphOpsSeq)
    }
}

impl<W: fmt::Debug> fmt::Debug for GraphOpsSeq<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GraphOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    GraphOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{core::Mode, infra::testing::check_acyclic};

    use super::*;

    #[test]
    fn replay_ops() {
        let mut graph = Graph::new(3, Mode::Maximize);

        let ops = GraphOpsSeq(vec![
            GraphOp::AddEdge(Index(0), Index(1), 2i8),
            GraphOp::AddEdge(Index(1), Index(5), 3),
            GraphOp::AddEdge(Index(2), Index(0), 1),
            GraphOp::EliminateCycles,
            GraphOp::FindPaths(Index(3)),
        ]);

        let results = ops
            .into_iter()
            .map(|op| op.apply(&mut graph))
            .collect::<Vec<_>>();

        assert_matches!(
            results[3],
            GraphOpResult::EliminateCycles(ref removed) if removed.len() == 1
        );
        assert_eq!(results[4], GraphOpResult::FindPaths(Ok(true)));
        assert_eq!(check_acyclic(&graph), Ok(()));
    }

    #[test]
    fn empty_graph_ops() {
        let mut graph = Graph::<i8>::new_minimize(0);

        assert_matches!(
            GraphOp::AddEdge(Index(0), Index(0), 1).apply(&mut graph),
            GraphOpResult::AddEdge(Err(Error::OutOfRange { .. }))
        );
        assert_eq!(
            GraphOp::RemoveEdge(Index(0)).apply(&mut graph),
            GraphOpResult::RemoveEdge(None)
        );
        assert_matches!(
            GraphOp::FindPaths(Index(0)).apply(&mut graph),
            GraphOpResult::FindPaths(Err(Error::OutOfRange { .. }))
        );
    }
}
