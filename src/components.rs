//! Connected components over alive vertices.
//!
//! Components follow the adjacency lists as stored. On an undirected graph these are the
//! usual connected components; on a directed graph a sweep only follows out-edges.

use crate::{graph::Graph, types::VId};

/// Counts the connected components formed by alive vertices.
pub fn count_connected_components(graph: &Graph) -> usize {
    sweep(graph, |_, _| ())
}

/// Returns the members of each connected component in discovery order.
pub fn connected_components(graph: &Graph) -> Vec<Vec<VId>> {
    let mut components: Vec<Vec<VId>> = Vec::new();
    sweep(graph, |component, v| {
        if component == components.len() {
            components.push(Vec::new());
        }
        components[component].push(v);
    });
    components
}

/// Floods every component from its smallest alive id, calling `f(component, v)` for each
/// member, and returns the number of components.
fn sweep<F>(graph: &Graph, mut f: F) -> usize
where
    F: FnMut(usize, VId),
{
    let mut visited = vec![false; graph.id_bound()];
    let mut stack = Vec::new();
    let mut count = 0;
    for root in 0..graph.id_bound() {
        if !graph.is_alive(root) || visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(root);
        while let Some(v) = stack.pop() {
            f(count, v);
            for &w in graph.neighbors(v) {
                if !visited[w] && graph.is_alive(w) {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }
        count += 1;
    }
    count
}
