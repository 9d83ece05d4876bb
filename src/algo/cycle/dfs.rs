use fixedbitset::FixedBitSet;

use crate::{
    core::id::{EdgeId, VertexId},
    storage::EdgeList,
};

use super::Cycle;

struct Frame {
    vertex: VertexId,
    // Edge through which the vertex was entered, `None` for roots.
    entered_by: Option<EdgeId>,
    next: usize,
}

/// Depth-first search from every vertex in ascending order, following
/// outgoing edges in sequence order. Stops at the first edge leading to a
/// vertex on the current path.
pub fn dfs_find<W>(storage: &EdgeList<W>) -> Option<Cycle> {
    let n = storage.vertex_count();
    let out = storage.out_edges();

    // Vertices entered in this search. Those not on the path are fully
    // explored and are not entered again.
    let mut visited = FixedBitSet::with_capacity(n);
    let mut on_path = FixedBitSet::with_capacity(n);
    let mut path: Vec<Frame> = Vec::new();

    for root in storage.vertex_ids() {
        if visited.put(root.as_usize()) {
            continue;
        }

        on_path.insert(root.as_usize());
        path.push(Frame {
            vertex: root,
            entered_by: None,
            next: 0,
        });

        while let Some(frame) = path.last_mut() {
            let Some(&(edge, dst)) = out[frame.vertex.as_usize()].get(frame.next) else {
                on_path.set(frame.vertex.as_usize(), false);
                path.pop();
                continue;
            };

            frame.next += 1;

            if on_path.contains(dst.as_usize()) {
                return Some(collect(&path, dst, edge));
            }

            if !visited.put(dst.as_usize()) {
                on_path.insert(dst.as_usize());
                path.push(Frame {
                    vertex: dst,
                    entered_by: Some(edge),
                    next: 0,
                });
            }
        }
    }

    None
}

fn collect(path: &[Frame], start: VertexId, closing: EdgeId) -> Cycle {
    let position = path
        .iter()
        .position(|frame| frame.vertex == start)
        .unwrap_or_default();
    let suffix = &path[position..];

    let vertices = suffix.iter().map(|frame| frame.vertex).collect();
    let edges = suffix
        .iter()
        .skip(1)
        .filter_map(|frame| frame.entered_by)
        .chain(Some(closing))
        .collect();

    Cycle { vertices, edges }
}
