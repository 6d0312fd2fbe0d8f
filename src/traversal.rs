//! Iterative breadth-first and depth-first traversals over alive vertices.

use crate::{
    graph::{Graph, Vertex},
    types::VId,
};
use std::collections::VecDeque;

/// The visitation order of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Last in, first out. Neighbors are pushed in adjacency order, so siblings are visited
    /// in reverse adjacency order.
    Depth,
    /// First in, first out.
    Breadth,
}

/// A lazy traversal yielding each alive vertex once.
///
/// A vertex is marked visited when it is taken off the work list, not when it is pushed, so
/// it may sit on the list several times but is yielded only once.
pub struct Traversal<'a> {
    graph: &'a Graph,
    order: Order,
    work: VecDeque<VId>,
    visited: Vec<bool>,
    sweep: Option<VId>,
}

impl<'a> Traversal<'a> {
    /// Traverses every alive vertex, starting from the graph source and then from each
    /// remaining unvisited vertex in ascending id order.
    pub fn new(graph: &'a Graph, order: Order) -> Self {
        let mut traversal = Self::empty(graph, order, Some(0));
        if let Some(source) = graph.source() {
            traversal.work.push_back(source);
        }
        traversal
    }

    /// Traverses the alive vertices reachable from `start` only.
    pub fn reachable(graph: &'a Graph, order: Order, start: VId) -> Self {
        let mut traversal = Self::empty(graph, order, None);
        traversal.work.push_back(start);
        traversal
    }

    fn empty(graph: &'a Graph, order: Order, sweep: Option<VId>) -> Self {
        Self {
            graph,
            order,
            work: VecDeque::new(),
            visited: vec![false; graph.id_bound()],
            sweep,
        }
    }

    fn take(&mut self) -> Option<VId> {
        match self.order {
            Order::Depth => self.work.pop_back(),
            Order::Breadth => self.work.pop_front(),
        }
    }

    fn next_root(&mut self) -> Option<VId> {
        let from = self.sweep?;
        let root = (from..self.graph.id_bound())
            .find(|&v| !self.visited[v] && self.graph.is_alive(v));
        self.sweep = root.map(|v| v + 1);
        root
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = match self.take() {
                Some(v) => v,
                None => {
                    let root = self.next_root()?;
                    self.work.push_back(root);
                    continue;
                }
            };
            if self.visited.get(v).copied().unwrap_or(true) || !self.graph.is_alive(v) {
                continue;
            }
            self.visited[v] = true;
            for &w in self.graph.neighbors(v) {
                if !self.visited[w] && self.graph.is_alive(w) {
                    self.work.push_back(w);
                }
            }
            return self.graph.vertex(v).ok();
        }
    }
}

/// Returns the labels of all alive vertices in depth-first order.
pub fn dfs(graph: &Graph) -> Vec<String> {
    Traversal::new(graph, Order::Depth)
        .map(|v| v.label().to_string())
        .collect()
}

/// Returns the labels of all alive vertices in breadth-first order.
pub fn bfs(graph: &Graph) -> Vec<String> {
    Traversal::new(graph, Order::Breadth)
        .map(|v| v.label().to_string())
        .collect()
}
