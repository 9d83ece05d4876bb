pub mod cycle;
pub mod eliminate_cycles;
pub mod extremal_paths;
pub mod solve;

pub use cycle::{is_cyclic, Cycle, CycleBuilder};
pub use eliminate_cycles::{CycleElimination, EliminateCycles};
pub use extremal_paths::{ExtremalPaths, ExtremalPathsBuilder, Path, Step};
pub use solve::{solve, Solution};
