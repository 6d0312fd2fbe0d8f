use crate::graph::{Edge, Graph};
use itertools::Itertools;

/// Writes one `v: w1 w2 ...` line per present vertex.
pub(crate) fn display(graph: &Graph, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for vertex in graph.vertices() {
        writeln!(
            f,
            "{}: {}",
            vertex.label(),
            graph
                .neighbors(vertex.id())
                .iter()
                .map(|&w| graph.vertex(w).map_or("?", |n| n.label()))
                .join(" ")
        )?;
    }
    Ok(())
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) --", self.src())?;
        if self.weight() != 0.0 {
            write!(f, "{}", self.weight())?;
        }
        let arrow = if self.is_undirected() { "--" } else { "->" };
        write!(f, "{} ({})", arrow, self.dst())
    }
}
