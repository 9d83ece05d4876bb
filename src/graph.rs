//! The graph model: a vertex count, an ordered multiset of weighted directed
//! edges and the [mode](Mode) paths are optimized for.

use std::ops::Index;

use crate::{
    algo::{CycleElimination, EliminateCycles, ExtremalPaths, ExtremalPathsBuilder},
    core::{
        id::{AsId, EdgeId, VertexId},
        Edge, EdgeRef, Error, IntoEdge, Mode, Weight,
    },
    storage::{edge_list::EdgesIter, EdgeList},
};

/// Weighted directed multigraph over the vertices `0..vertex_count`.
///
/// # Examples
///
/// ```
/// use extremal::{core::Mode, Graph};
///
/// let mut graph = Graph::new(3, Mode::Minimize);
/// graph.extend_with_edges([(0, 1, 2), (1, 2, 3), (0, 2, 10)]);
///
/// let paths = graph.find_paths(0).unwrap();
/// assert_eq!(paths.distances(), &[0, 2, 5]);
///
/// let path = paths.reconstruct_path(2).unwrap();
/// assert_eq!(path.total_weight, 5);
/// assert_eq!(path.steps.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W> {
    storage: EdgeList<W>,
    mode: Mode,
}

impl<W> Graph<W> {
    pub fn new(vertex_count: usize, mode: Mode) -> Self {
        Self::new_in(EdgeList::new(vertex_count), mode)
    }

    pub fn new_minimize(vertex_count: usize) -> Self {
        Self::new(vertex_count, Mode::Minimize)
    }

    pub fn new_maximize(vertex_count: usize) -> Self {
        Self::new(vertex_count, Mode::Maximize)
    }

    pub fn new_in(storage: EdgeList<W>, mode: Mode) -> Self {
        Self { storage, mode }
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize, mode: Mode) -> Self {
        Self::new_in(EdgeList::with_capacity(vertex_count, edge_count), mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.storage.edge_count()
    }

    pub fn contains_vertex<VI: AsId<VertexId>>(&self, id: VI) -> bool {
        self.storage.contains_vertex(&id.as_id())
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.storage.vertex_ids()
    }

    pub fn add_edge<VI: AsId<VertexId>>(&mut self, src: VI, dst: VI, weight: W) -> EdgeId {
        match self.try_add_edge(src, dst, weight) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    /// Appends an edge to the edge sequence.
    ///
    /// Fails with [`Error::OutOfRange`] if any of the endpoints is not a
    /// vertex of the graph.
    pub fn try_add_edge<VI: AsId<VertexId>>(
        &mut self,
        src: VI,
        dst: VI,
        weight: W,
    ) -> Result<EdgeId, Error> {
        self.storage.try_add_edge(src.as_id(), dst.as_id(), weight)
    }

    pub fn extend_with_edges<T, I>(&mut self, iter: I)
    where
        T: IntoEdge<W>,
        I: IntoIterator<Item = T>,
    {
        for edge in iter {
            let (src, dst, weight) = edge.unpack();
            self.add_edge(src, dst, weight);
        }
    }

    pub fn try_extend_with_edges<T, I>(&mut self, iter: I) -> Result<(), Error>
    where
        T: IntoEdge<W>,
        I: IntoIterator<Item = T>,
    {
        for edge in iter {
            let (src, dst, weight) = edge.unpack();
            self.try_add_edge(src, dst, weight)?;
        }
        Ok(())
    }

    pub fn edge<EI: AsId<EdgeId>>(&self, id: EI) -> Option<EdgeRef<'_, W>> {
        self.storage.edge(&id.as_id())
    }

    /// Iterates the edges in sequence order.
    pub fn edges(&self) -> EdgesIter<'_, W> {
        self.storage.edges()
    }

    pub fn edge_id_any<VI: AsId<VertexId>>(&self, src: VI, dst: VI) -> Option<EdgeId> {
        self.storage.edge_id_any(&src.as_id(), &dst.as_id())
    }

    pub fn remove_edge<EI: AsId<EdgeId>>(&mut self, id: EI) -> Option<W> {
        self.storage.remove_edge(&id.as_id())
    }

    pub fn clear_edges(&mut self) {
        self.storage.clear_edges();
    }

    pub(crate) fn storage(&self) -> &EdgeList<W> {
        &self.storage
    }
}

impl<W: Weight> Graph<W> {
    /// Returns an acyclic copy of the graph, see [`EliminateCycles`].
    ///
    /// The graph itself is left untouched.
    #[must_use]
    pub fn eliminate_cycles(&self) -> Self {
        EliminateCycles::on(self).run().graph
    }

    /// Breaks all cycles of the graph in place and returns the removed edges.
    ///
    /// The removal cannot be undone. Use [`Graph::eliminate_cycles`] to keep
    /// the original graph.
    pub fn eliminate_cycles_in_place(&mut self) -> Vec<Edge<W>> {
        let CycleElimination { graph, removed } = EliminateCycles::on(self).run();
        *self = graph;
        removed
    }

    /// Starts configuring a path computation on this graph.
    pub fn paths(&self) -> ExtremalPathsBuilder<'_, W> {
        ExtremalPaths::on(self)
    }

    /// Computes path labels from `start` with the default configuration.
    pub fn find_paths<VI: AsId<VertexId>>(
        &self,
        start: VI,
    ) -> Result<ExtremalPaths<'_, W>, Error> {
        ExtremalPaths::on(self).run(start)
    }
}

impl<W> Index<EdgeId> for Graph<W> {
    type Output = W;

    fn index(&self, index: EdgeId) -> &Self::Output {
        self.storage
            .edge(&index)
            .map(|edge| edge.weight)
            .unwrap_or_else(|| panic!("edge {index} does not exist"))
    }
}

impl<W: Clone> Graph<W> {
    /// Removes the edge and returns it in owned form.
    pub fn take_edge<EI: AsId<EdgeId>>(&mut self, id: EI) -> Option<Edge<W>> {
        let id = id.as_id();
        let edge = Edge::from(self.edge(id)?);
        self.remove_edge(id);
        Some(edge)
    }
}
