use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use fixedbitset::FixedBitSet;

use crate::{algo::Path, graph::Graph};

pub trait Export<G> {
    fn export<O: Write>(&self, graph: &G, out: &mut O) -> io::Result<()>;
}

/// Export to [DOT](https://graphviz.org/doc/info/lang.html) format.
///
/// Edges of a highlighted path are drawn bold and red.
pub struct Dot<W> {
    name: String,
    get_edge_label: Box<dyn Fn(&W) -> String>,
    highlighted: FixedBitSet,
}

impl<W> Dot<W> {
    pub fn new<F>(name: Option<String>, get_edge_label: F) -> Self
    where
        F: Fn(&W) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_edge_label: Box::new(get_edge_label),
            highlighted: FixedBitSet::new(),
        }
    }

    pub fn highlight(mut self, path: &Path<W>) -> Self {
        for edge in path.edges() {
            self.highlighted.grow(edge.as_usize() + 1);
            self.highlighted.put(edge.as_usize());
        }
        self
    }

    pub fn to_string(&self, graph: &Graph<W>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<W: Display> Dot<W> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |w| format!("{w}"))
    }
}

impl<W> Export<Graph<W>> for Dot<W> {
    fn export<O: Write>(&self, graph: &Graph<W>, out: &mut O) -> io::Result<()> {
        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        writeln!(out, "    label={:?};", format!("{}", graph.mode()))?;

        for vertex in graph.vertex_ids() {
            writeln!(out, "    v{vertex} [label=\"{vertex}\"];")?;
        }

        for edge in graph.edges() {
            let style = if self.highlighted.contains(edge.id.as_usize()) {
                ", color=red, penwidth=2"
            } else {
                ""
            };

            writeln!(
                out,
                "    v{} -> v{} [label={:?}{style}];",
                edge.src,
                edge.dst,
                (self.get_edge_label)(edge.weight)
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
