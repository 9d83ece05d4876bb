//! Single-source shortest and longest paths on weighted directed multigraphs.
//!
//! A [`Graph`] carries a [mode](core::Mode) that selects the objective. Labels
//! are computed by [relaxation sweeps](algo::ExtremalPaths) and, when
//! maximizing, cycles are first broken by [removing their lightest
//! edge](algo::EliminateCycles).

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;

pub use graph::Graph;

pub mod prelude {
    pub use crate::{
        algo::{solve, EliminateCycles, ExtremalPaths, Path, Solution},
        core::{
            id::{EdgeId, VertexId},
            Mode, Weight,
        },
        graph::Graph,
    };
}
