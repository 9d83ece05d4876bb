#![no_main]

use libfuzzer_sys::fuzz_target;

use extremal::{
    core::Mode,
    infra::{
        arbitrary::{GraphOp, GraphOpResult, GraphOpsSeq},
        testing::{check_acyclic, check_fixed_point, check_paths},
    },
    Graph,
};

fuzz_target!(|input: (bool, u8, GraphOpsSeq<i8>)| {
    let (maximize, vertex_count, ops) = input;
    let mode = if maximize { Mode::Maximize } else { Mode::Minimize };

    let mut graph = Graph::<i8>::new(vertex_count as usize % 32, mode);

    for op in ops {
        let find_paths = matches!(op, GraphOp::FindPaths(_));

        if let GraphOpResult::EliminateCycles(_) = op.apply(&mut graph) {
            check_acyclic(&graph)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();
        }

        if find_paths && graph.vertex_count() > 0 {
            let paths = graph.find_paths(0).unwrap();
            if paths.converged() {
                check_fixed_point(&paths)
                    .as_ref()
                    .map_err(ToString::to_string)
                    .unwrap();
                check_paths(&paths)
                    .as_ref()
                    .map_err(ToString::to_string)
                    .unwrap();
            }
        }
    }
});
