use std::{iter::Enumerate, slice};

use crate::core::{
    id::{EdgeId, VertexId},
    EdgeRef, Error,
};

/// Ordered multiset of weighted directed edges over the positional vertex set
/// `0..vertex_count`.
///
/// The edges are kept in insertion order and are never merged, sorted or
/// deduplicated. Parallel edges and self-loops are allowed. Removing an edge
/// shifts the ids of all edges inserted after it.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList<W> {
    vertex_count: usize,
    edges: Vec<W>,
    endpoints: Vec<[VertexId; 2]>,
}

impl<W> EdgeList<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(edge_count),
            endpoints: Vec::with_capacity(edge_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, id: &VertexId) -> bool {
        id.as_usize() < self.vertex_count
    }

    pub fn check_vertex(&self, id: &VertexId) -> Result<(), Error> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(Error::out_of_range(*id, self.vertex_count))
        }
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count).map(VertexId::from)
    }

    pub fn try_add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        edge: W,
    ) -> Result<EdgeId, Error> {
        self.check_vertex(&src)?;
        self.check_vertex(&dst)?;

        let id = EdgeId::from(self.edges.len());
        self.edges.push(edge);
        self.endpoints.push([src, dst]);
        Ok(id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<EdgeRef<'_, W>> {
        let index = id.as_usize();
        let weight = self.edges.get(index)?;
        let [src, dst] = self.endpoints[index];

        Some(EdgeRef {
            id: *id,
            src,
            dst,
            weight,
        })
    }

    pub fn edges(&self) -> EdgesIter<'_, W> {
        EdgesIter {
            inner: self.edges.iter().enumerate(),
            endpoints: &self.endpoints,
        }
    }

    /// Returns the first edge in sequence order going from `src` to `dst`.
    pub fn edge_id_any(&self, src: &VertexId, dst: &VertexId) -> Option<EdgeId> {
        self.endpoints
            .iter()
            .position(|endpoints| endpoints == &[*src, *dst])
            .map(EdgeId::from)
    }

    /// Outgoing edges of every vertex together with their destinations, each
    /// list in sequence order.
    ///
    /// Built in a single pass over the edges, so that traversals do not scan
    /// the whole edge list for every visited vertex.
    pub fn out_edges(&self) -> Vec<Vec<(EdgeId, VertexId)>> {
        let mut out = vec![Vec::new(); self.vertex_count];
        for (index, [src, dst]) in self.endpoints.iter().enumerate() {
            out[src.as_usize()].push((EdgeId::from(index), *dst));
        }
        out
    }

    /// Removes the edge while preserving the order of the remaining ones.
    pub fn remove_edge(&mut self, id: &EdgeId) -> Option<W> {
        let index = id.as_usize();
        if index >= self.edges.len() {
            return None;
        }

        self.endpoints.remove(index);
        Some(self.edges.remove(index))
    }

    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.endpoints.clear();
    }
}

pub struct EdgesIter<'a, W> {
    inner: Enumerate<slice::Iter<'a, W>>,
    endpoints: &'a [[VertexId; 2]],
}

impl<'a, W> Iterator for EdgesIter<'a, W> {
    type Item = EdgeRef<'a, W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, weight)| {
            let [src, dst] = self.endpoints[index];
            EdgeRef {
                id: EdgeId::from(index),
                src,
                dst,
                weight,
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<W> ExactSizeIterator for EdgesIter<'_, W> {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn e(index: usize) -> EdgeId {
        index.into()
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut edges = EdgeList::new(2);

        assert_matches!(
            edges.try_add_edge(v(0), v(2), 1),
            Err(Error::OutOfRange { vertex, vertex_count: 2 }) if vertex == v(2)
        );
        assert_matches!(
            edges.try_add_edge(v(5), v(0), 1),
            Err(Error::OutOfRange { vertex, .. }) if vertex == v(5)
        );
        assert_eq!(edges.edge_count(), 0);
    }

    #[test]
    fn parallel_edges_and_loops_kept() {
        let mut edges = EdgeList::new(2);

        edges.try_add_edge(v(0), v(1), 3).unwrap();
        edges.try_add_edge(v(0), v(1), 1).unwrap();
        edges.try_add_edge(v(1), v(1), 2).unwrap();

        assert_eq!(edges.edge_count(), 3);
        assert_eq!(
            edges.edges().map(|edge| *edge.weight).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        assert!(edges.edge(&e(2)).unwrap().is_loop());
        assert_eq!(edges.edge_id_any(&v(0), &v(1)), Some(e(0)));
        assert_eq!(edges.edge_id_any(&v(1), &v(0)), None);
    }

    #[test]
    fn remove_edge_preserves_order() {
        let mut edges = EdgeList::new(3);

        edges.try_add_edge(v(0), v(1), 10).unwrap();
        edges.try_add_edge(v(1), v(2), 20).unwrap();
        edges.try_add_edge(v(2), v(0), 30).unwrap();

        assert_eq!(edges.remove_edge(&e(0)), Some(10));
        assert_eq!(edges.remove_edge(&e(5)), None);

        let remaining = edges
            .edges()
            .map(|edge| (edge.src, edge.dst, *edge.weight))
            .collect::<Vec<_>>();
        assert_eq!(remaining, vec![(v(1), v(2), 20), (v(2), v(0), 30)]);
    }

    #[test]
    fn out_edges_in_sequence_order() {
        let mut edges = EdgeList::new(3);

        edges.try_add_edge(v(0), v(2), 1).unwrap();
        edges.try_add_edge(v(1), v(2), 1).unwrap();
        edges.try_add_edge(v(0), v(1), 1).unwrap();

        assert_eq!(
            edges.out_edges(),
            vec![vec![(e(0), v(2)), (e(2), v(1))], vec![(e(1), v(2))], vec![]]
        );
    }
}
