use crate::graph::Graph;

use super::{dfs::dfs_find, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a, W> {
    graph: &'a Graph<W>,
}

impl Cycle {
    /// Starts the cycle search on the given graph.
    pub fn on<W>(graph: &Graph<W>) -> CycleBuilder<'_, W> {
        CycleBuilder { graph }
    }
}

impl<'a, W> CycleBuilder<'a, W> {
    /// Runs the search and returns the first cycle found, if any.
    pub fn run(self) -> Option<Cycle> {
        dfs_find(self.graph.storage())
    }
}
