//! Find [single source] shortest or longest paths and their weights.
//!
//! See available parameters [here](ExtremalPathsBuilder#implementations).
//!
//! The objective is given by the [mode](crate::core::Mode) of the graph.
//! Labels are computed by a label-correcting method from the Bellman-Ford
//! family: all edges are relaxed in sequence order, sweep after sweep, until a
//! sweep changes nothing or the sweep bound is reached. The result is
//! meaningful when the graph has no cycle that keeps improving labels, that is
//! no negative cycle when minimizing and no positive cycle when maximizing.
//! For the latter, [eliminate cycles](crate::algo::EliminateCycles) first.
//!
//! The predecessor of every reached vertex is the exact edge that produced its
//! label, so reconstructed paths report the weights that were actually used,
//! even in the presence of parallel edges.
//!
//! [single source]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use extremal::{algo::ExtremalPaths, Graph};
//!
//! let mut graph = Graph::new_maximize(4);
//!
//! graph.extend_with_edges([(0, 1, 3), (1, 3, 4), (0, 2, 1), (2, 3, 9)]);
//!
//! let paths = ExtremalPaths::on(&graph).run(0).unwrap();
//! assert_eq!(paths.dist(3), Some(&10));
//!
//! let path = paths.reconstruct_path(3).unwrap();
//! let vertices = path.vertices().map(usize::from).collect::<Vec<_>>();
//! assert_eq!(vertices, vec![0, 2, 3]);
//! ```

use std::ops::Index;

use crate::{
    core::{
        id::{AsId, EdgeId, VertexId},
        Error, Mode, Weight,
    },
    graph::Graph,
};

mod bellman_ford;
mod builder;

pub use builder::ExtremalPathsBuilder;

/// Path labels from a single start vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ExtremalPaths<'a, W> {
    graph: &'a Graph<W>,
    start: VertexId,
    dist: Vec<W>,
    pred: Vec<Option<EdgeId>>,
    sweeps: usize,
    converged: bool,
}

impl<'a, W> ExtremalPaths<'a, W> {
    /// Vertex where the search was started.
    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn mode(&self) -> Mode {
        self.graph.mode()
    }

    /// The graph the labels were computed on.
    pub fn graph(&self) -> &'a Graph<W> {
        self.graph
    }

    /// Number of relaxation sweeps performed.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Returns `true` if the last sweep did not improve any label.
    ///
    /// If `false`, the sweep bound was reached while labels were still
    /// changing, which means that an improving cycle is reachable from the
    /// start. The labels are then the state after the last sweep and are not
    /// optimal.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Raw labels indexed by vertex.
    ///
    /// Vertices not reachable from the start hold the sentinel of the mode,
    /// [`Weight::inf`] when minimizing and [`Weight::neg_inf`] when
    /// maximizing.
    pub fn distances(&self) -> &[W] {
        &self.dist
    }

    /// The edge through which the label of the vertex was last improved.
    pub fn predecessor_edge<VI: AsId<VertexId>>(&self, vertex: VI) -> Option<EdgeId> {
        self.pred.get(vertex.as_id().as_usize()).copied().flatten()
    }

    /// The vertex preceding the given one on its path from the start.
    pub fn predecessor<VI: AsId<VertexId>>(&self, vertex: VI) -> Option<VertexId> {
        let edge = self.predecessor_edge(vertex)?;
        self.graph.edge(edge).map(|edge| edge.src)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the start vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the vertex is unreachable or is the start.
    pub fn reconstruct<VI: AsId<VertexId>>(&self, to: VI) -> PathReconstruction<'_, 'a, W> {
        PathReconstruction {
            curr: to.as_id(),
            paths: self,
            remaining: self.graph.vertex_count(),
        }
    }
}

impl<'a, W: Weight> ExtremalPaths<'a, W> {
    /// Returns the label of the vertex, or `None` if the vertex is not
    /// reachable from the start (or does not exist).
    pub fn dist<VI: AsId<VertexId>>(&self, vertex: VI) -> Option<&W> {
        self.dist
            .get(vertex.as_id().as_usize())
            .filter(|dist| **dist != self.mode().sentinel::<W>())
    }

    pub fn is_reachable<VI: AsId<VertexId>>(&self, vertex: VI) -> bool {
        self.dist(vertex).is_some()
    }

    /// Labels of all vertices, `None` for unreachable ones.
    pub fn labels(&self) -> impl Iterator<Item = (VertexId, Option<&W>)> + '_ {
        self.graph
            .vertex_ids()
            .map(move |vertex| (vertex, self.dist(vertex)))
    }

    /// Reconstructs the path from the start to `end`.
    ///
    /// Returns `Ok(None)` if `end` is unreachable and an empty path if `end`
    /// is the start. Fails with [`Error::OutOfRange`] if `end` is not a vertex
    /// of the graph.
    pub fn path<VI: AsId<VertexId>>(&self, end: VI) -> Result<Option<Path<W>>, Error> {
        let end = end.as_id();
        self.graph.storage().check_vertex(&end)?;

        if end == self.start {
            return Ok(Some(Path::default()));
        }

        if !self.is_reachable(end) {
            return Ok(None);
        }

        let mut steps = Vec::new();
        let mut curr = end;

        while curr != self.start {
            if steps.len() >= self.graph.vertex_count() {
                return Err(Error::CyclicPredecessors { vertex: end });
            }

            let Some(id) = self.predecessor_edge(curr) else {
                return Ok(None);
            };
            let edge = self.graph.edge(id).ok_or(Error::EdgeNotAvailable(id))?;

            steps.push(Step {
                from: edge.src,
                to: edge.dst,
                edge: id,
                weight: edge.weight.clone(),
            });
            curr = edge.src;
        }

        steps.reverse();

        let total_weight = steps
            .iter()
            .try_fold(W::zero(), |total, step| total.combine(&step.weight))
            .ok_or(Error::WeightOverflow { vertex: end })?;

        Ok(Some(Path {
            steps,
            total_weight,
        }))
    }

    /// Reconstructs the path from the start to `end`, collapsing both the
    /// unreachable case and `end == start` into an empty path of zero weight.
    ///
    /// Use [`ExtremalPaths::path`] to tell the two apart.
    pub fn reconstruct_path<VI: AsId<VertexId>>(&self, end: VI) -> Result<Path<W>, Error> {
        self.path(end).map(Option::unwrap_or_default)
    }
}

impl<'a, W, VI> Index<VI> for ExtremalPaths<'a, W>
where
    VI: AsId<VertexId>,
{
    type Output = W;

    fn index(&self, index: VI) -> &Self::Output {
        &self.dist[index.as_id().as_usize()]
    }
}

/// One edge of a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub edge: EdgeId,
    pub weight: W,
}

/// Concrete edge sequence from the start to some vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    /// Steps ordered from the start to the end.
    pub steps: Vec<Step<W>>,
    pub total_weight: W,
}

impl<W: Weight> Path<W> {
    pub fn new(steps: Vec<Step<W>>) -> Self {
        let total_weight = steps
            .iter()
            .fold(W::zero(), |total, step| total + step.weight.clone());

        Self {
            steps,
            total_weight,
        }
    }
}

impl<W: Weight> Default for Path<W> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            total_weight: W::zero(),
        }
    }
}

impl<W> Path<W> {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Vertices along the path, including both endpoints. Empty for an empty
    /// path.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.steps
            .first()
            .map(|step| step.from)
            .into_iter()
            .chain(self.steps.iter().map(|step| step.to))
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.steps.iter().map(|step| step.edge)
    }
}

/// Iterator over the vertices on the path from a vertex to the start vertex.
///
/// Returned by [`ExtremalPaths::reconstruct`].
pub struct PathReconstruction<'p, 'a, W> {
    curr: VertexId,
    paths: &'p ExtremalPaths<'a, W>,
    // Guards against predecessor cycles left by a relaxation that did not
    // converge.
    remaining: usize,
}

impl<'p, 'a, W> Iterator for PathReconstruction<'p, 'a, W> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr == self.paths.start || self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.curr = self.paths.predecessor(self.curr)?;
        Some(self.curr)
    }
}
