use tracing::{debug, warn};

use crate::{
    core::{
        id::{AsId, VertexId},
        Error, Weight,
    },
    graph::Graph,
};

use super::{bellman_ford::bellman_ford, ExtremalPaths};

/// Default number of sweeps per vertex.
///
/// Without improving cycles, labels settle after at most `vertex_count - 1`
/// sweeps.
pub const DEFAULT_SWEEP_FACTOR: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepBound {
    PerVertex(usize),
    Fixed(usize),
}

/// Builder for [`ExtremalPaths`].
pub struct ExtremalPathsBuilder<'a, W> {
    graph: &'a Graph<W>,
    bound: SweepBound,
}

impl<'a, W> ExtremalPaths<'a, W> {
    pub fn on(graph: &'a Graph<W>) -> ExtremalPathsBuilder<'a, W> {
        ExtremalPathsBuilder {
            graph,
            bound: SweepBound::PerVertex(DEFAULT_SWEEP_FACTOR),
        }
    }
}

impl<'a, W> ExtremalPathsBuilder<'a, W> {
    /// Bounds the number of sweeps by `factor × vertex_count`.
    pub fn sweep_factor(self, factor: usize) -> Self {
        Self {
            bound: SweepBound::PerVertex(factor),
            ..self
        }
    }

    /// Bounds the number of sweeps by the given absolute number.
    pub fn max_sweeps(self, max_sweeps: usize) -> Self {
        Self {
            bound: SweepBound::Fixed(max_sweeps),
            ..self
        }
    }

    fn sweep_bound(&self) -> usize {
        match self.bound {
            SweepBound::PerVertex(factor) => factor.saturating_mul(self.graph.vertex_count()),
            SweepBound::Fixed(max_sweeps) => max_sweeps,
        }
    }
}

impl<'a, W: Weight> ExtremalPathsBuilder<'a, W> {
    /// Computes labels from the start vertex.
    ///
    /// Fails with [`Error::OutOfRange`] if `start` is not a vertex of the
    /// graph.
    pub fn run<VI: AsId<VertexId>>(self, start: VI) -> Result<ExtremalPaths<'a, W>, Error> {
        let start = start.as_id();
        self.graph.storage().check_vertex(&start)?;

        let max_sweeps = self.sweep_bound();
        let paths = bellman_ford(self.graph, start, max_sweeps);

        if paths.converged() {
            debug!(
                start = %start,
                mode = %self.graph.mode(),
                sweeps = paths.sweeps(),
                "relaxation converged"
            );
        } else {
            warn!(
                start = %start,
                mode = %self.graph.mode(),
                max_sweeps,
                "relaxation reached the sweep bound without converging"
            );
        }

        Ok(paths)
    }
}
