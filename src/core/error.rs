use thiserror::Error;

use super::id::{EdgeId, VertexId};

/// The error encountered when building a graph or querying paths in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A vertex id falls outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Following the predecessors of the vertex does not lead back to the
    /// start.
    ///
    /// This happens only when relaxation did not converge, that is an
    /// improving cycle is reachable from the start.
    #[error("predecessors of vertex {vertex} do not lead to the start")]
    CyclicPredecessors { vertex: VertexId },

    /// The total weight of the path to the vertex does not fit the weight
    /// type.
    ///
    /// Labels themselves never overflow, so this happens only when relaxation
    /// did not converge and the predecessor chain no longer matches the
    /// labels.
    #[error("total weight of the path to vertex {vertex} overflows")]
    WeightOverflow { vertex: VertexId },

    /// An edge not available.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates that path labels are used with a different graph than the
    /// one they were computed on.
    #[error("edge {0} not available")]
    EdgeNotAvailable(EdgeId),
}

impl Error {
    pub(crate) fn out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        Error::OutOfRange {
            vertex,
            vertex_count,
        }
    }
}
