#![allow(dead_code)]

use extremal::{core::Mode, Graph};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    /// Generates pairs `(v, w)` with `w < v`, each with probability `p`.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Random graph with integer-valued weights. Edges go from the lower to the
/// higher vertex unless `cyclic` is set, in which case half of them are
/// reversed.
pub fn extremal_random(
    vertex_count: usize,
    density: f32,
    mode: Mode,
    cyclic: bool,
    rng: &mut Rng,
) -> Graph<f32> {
    let mut graph = Graph::new(vertex_count, mode);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let weight = rng.u32(1..100) as f32;
        if cyclic && rng.bool() {
            graph.add_edge(u, v, weight);
        } else {
            graph.add_edge(v, u, weight);
        }
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), f32> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let weight = rng.u32(1..100) as f32;
        graph.add_edge(NodeIndex::new(v), NodeIndex::new(u), weight);
    }

    graph
}
