//! Building blocks shared by the graph storage and the algorithms.

pub mod error;
pub mod id;
pub mod mode;
pub mod weight;

mod base;

pub use base::*;
pub use error::Error;
pub use mode::Mode;
pub use weight::Weight;
