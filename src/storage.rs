//! Graph storage.
//!
//! The only storage is the [edge list](edge_list): path computation by
//! relaxation sweeps over all edges in a fixed order, which is exactly the
//! access pattern the edge list serves best.
//!
//! |                | **[EdgeList]** |
//! |----------------|----------------|
//! | add edge       | _O*(1)_        |
//! | iterate edges  | _O(E)_         |
//! | lookup edge    | _O(1)_         |
//! | remove edge    | _O(E)_         |
//! | space          | _O(E)_         |
//! | multi edge     | YES            |
//! | stable IDs     | NO             |
//!
//! * _E_ – edge count
//! * _O*(..)_ – amortized complexity

pub mod edge_list;

pub use edge_list::EdgeList;
