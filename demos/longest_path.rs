use extremal::{algo::EliminateCycles, core::Mode, infra::export::Dot, Graph};
use tracing_subscriber::EnvFilter;

fn main() {
    // Use `RUST_LOG=extremal=debug` to see the removed cycle edges.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Tasks of a small project with their durations in days. The back edge
    // from testing to design makes the graph cyclic.
    let names = ["start", "design", "backend", "frontend", "testing", "release"];
    let mut graph = Graph::new(names.len(), Mode::Maximize);

    graph.extend_with_edges([
        (0, 1, 3),
        (1, 2, 10),
        (1, 3, 6),
        (2, 4, 4),
        (3, 4, 2),
        (4, 1, 1),
        (4, 5, 1),
    ]);

    let elimination = EliminateCycles::on(&graph).run();

    for edge in &elimination.removed {
        println!(
            "removed {} -> {} ({})",
            names[edge.src.as_usize()],
            names[edge.dst.as_usize()],
            edge.weight
        );
    }

    let acyclic = elimination.graph;
    let path = acyclic
        .find_paths(0)
        .and_then(|paths| paths.path(5))
        .unwrap_or_else(|error| panic!("{error}"));

    match path {
        Some(path) => {
            let tasks = path
                .vertices()
                .map(|v| names[v.as_usize()])
                .collect::<Vec<_>>()
                .join(" - ");

            println!("{} days through {tasks}", path.total_weight);
            // 18 days through start - design - backend - testing - release

            let dot = Dot::with_display(Some(String::from("project"))).highlight(&path);
            println!("{}", dot.to_string(&acyclic));
        }
        None => println!("release is not reachable"),
    }
}
