use super::id::{AsId, EdgeId, VertexId};

/// Borrowed view of a single edge of a graph.
#[derive(Debug, PartialEq)]
pub struct EdgeRef<'a, W> {
    pub id: EdgeId,
    pub src: VertexId,
    pub dst: VertexId,
    pub weight: &'a W,
}

// Derives would require `W: Clone`.
impl<W> Clone for EdgeRef<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for EdgeRef<'_, W> {}

impl<'a, W> EdgeRef<'a, W> {
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.src, self.dst)
    }

    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }
}

/// Owned edge, as removed from a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    pub src: VertexId,
    pub dst: VertexId,
    pub weight: W,
}

impl<W: Clone> From<EdgeRef<'_, W>> for Edge<W> {
    fn from(edge: EdgeRef<'_, W>) -> Self {
        Self {
            src: edge.src,
            dst: edge.dst,
            weight: edge.weight.clone(),
        }
    }
}

/// Conversion of tuples and edges into the `(src, dst, weight)` triple
/// accepted by [`Graph::extend_with_edges`](crate::graph::Graph::extend_with_edges).
pub trait IntoEdge<W> {
    fn unpack(self) -> (VertexId, VertexId, W);
}

impl<W, VI: AsId<VertexId>> IntoEdge<W> for (VI, VI, W) {
    fn unpack(self) -> (VertexId, VertexId, W) {
        (self.0.as_id(), self.1.as_id(), self.2)
    }
}

impl<W> IntoEdge<W> for Edge<W> {
    fn unpack(self) -> (VertexId, VertexId, W) {
        (self.src, self.dst, self.weight)
    }
}
