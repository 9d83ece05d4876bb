//! Identifiers of vertices and edges.
//!
//! Vertex identity is positional: a graph with `n` vertices has exactly the
//! vertices `0..n`. Edge identity is the position of the edge in the graph's
//! edge sequence, so it is only meaningful for the graph it was obtained from
//! and only until an edge is removed from that graph.

use std::fmt;

/// Identifier of a vertex, an integer in `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(usize);

/// Identifier of an edge, its position in the edge sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EdgeId(usize);

macro_rules! impl_int_id {
    ($id_ty:ident) => {
        impl $id_ty {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn as_usize(&self) -> usize {
                self.0
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.0
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_int_id!(VertexId);
impl_int_id!(EdgeId);

/// Types that can be used where an id is expected: the id itself, a
/// reference to it, or a plain `usize` index.
pub trait AsId<I> {
    fn as_id(&self) -> I;
}

macro_rules! impl_as_id {
    ($id_ty:ident) => {
        impl AsId<$id_ty> for $id_ty {
            fn as_id(&self) -> $id_ty {
                *self
            }
        }

        impl AsId<$id_ty> for &$id_ty {
            fn as_id(&self) -> $id_ty {
                **self
            }
        }

        impl AsId<$id_ty> for usize {
            fn as_id(&self) -> $id_ty {
                $id_ty(*self)
            }
        }
    };
}

impl_as_id!(VertexId);
impl_as_id!(EdgeId);
