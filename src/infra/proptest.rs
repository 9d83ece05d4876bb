use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::{
    core::{Mode, Weight},
    graph::Graph,
};

/// Strategy for graphs of the given mode with edge weights drawn from
/// `weight`.
///
/// Usage: `graph_strategy(Mode::Maximize, -50i32..50).max_vertices(8).acyclic()`.
pub fn graph_strategy<S>(mode: Mode, weight: S) -> GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: Weight + 'static,
{
    GraphStrategy::new(mode, weight)
}

#[derive(Debug, Clone)]
pub struct GraphStrategy<S> {
    mode: Mode,
    weight: S,
    params: StrategyParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    max_vertices: usize,
    max_edges: usize,
    allow_loops: bool,
    acyclic: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_vertices: 16,
            max_edges: 48,
            allow_loops: true,
            acyclic: false,
        }
    }
}

impl StrategyParams {
    pub fn max_vertices(self, max_vertices: usize) -> Self {
        Self {
            max_vertices,
            ..self
        }
    }

    pub fn max_edges(self, max_edges: usize) -> Self {
        Self { max_edges, ..self }
    }

    pub fn no_loops(self) -> Self {
        Self {
            allow_loops: false,
            ..self
        }
    }

    /// Orients every edge from the lower to the higher vertex, which rules out
    /// loops too.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            allow_loops: false,
            ..self
        }
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<S> GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: Weight + 'static,
{
    pub fn new(mode: Mode, weight: S) -> Self {
        Self::with_params(mode, weight, StrategyParams::default())
    }

    pub fn with_params(mode: Mode, weight: S, params: StrategyParams) -> Self {
        Self {
            mode,
            weight,
            params,
        }
    }

    delegate_builder_fn!(max_vertices, max_vertices: usize);
    delegate_builder_fn!(max_edges, max_edges: usize);
    delegate_builder_fn!(no_loops);
    delegate_builder_fn!(acyclic);

    fn inner(&self) -> BoxedStrategy<Graph<S::Value>> {
        let mode = self.mode;
        let params = self.params;
        let weight = self.weight.clone();

        (0..=params.max_vertices)
            .prop_flat_map(move |n| {
                // Endpoints are drawn from a non-empty range, an empty graph
                // gets no edges anyway.
                let bound = n.max(1);
                let max_edges = if n == 0 { 0 } else { params.max_edges };
                let edge = (0..bound, 0..bound, weight.clone());

                vec(edge, 0..=max_edges).prop_map(move |edges| {
                    let mut graph = Graph::with_capacity(n, edges.len(), mode);

                    for (src, dst, weight) in edges {
                        if src == dst && !params.allow_loops {
                            continue;
                        }

                        let (src, dst) = if params.acyclic && src > dst {
                            (dst, src)
                        } else {
                            (src, dst)
                        };

                        graph.add_edge(src, dst, weight);
                    }

                    graph
                })
            })
            .boxed()
    }
}

impl<S> Strategy for GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: Weight + 'static,
{
    type Tree = Box<dyn ValueTree<Value = Graph<S::Value>>>;
    type Value = Graph<S::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.inner().new_tree(runner)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::testing::check_acyclic;

    use super::*;

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_respects_params(graph in graph_strategy(Mode::Minimize, 0i32..10).max_vertices(6).max_edges(10).no_loops()) {
            prop_assert!(graph.vertex_count() <= 6);
            prop_assert!(graph.edge_count() <= 10);
            prop_assert!(graph.edges().all(|edge| !edge.is_loop()));
            prop_assert_eq!(graph.mode(), Mode::Minimize);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_acyclic_graphs(graph in graph_strategy(Mode::Maximize, -5i64..5).acyclic()) {
            prop_assert_eq!(check_acyclic(&graph), Ok(()));
        }
    }
}
