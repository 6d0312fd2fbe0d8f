use crate::{articulation::ArticulationPoints, graph::Graph, types::VId};
use log::{info, warn};

/// Receives the detector state while it walks the graph.
pub trait Observer {
    /// Called after every edge between alive vertices has been relaxed.
    fn edge_visited(&mut self, progress: &Progress<'_>);

    /// Called once when every alive vertex has been visited.
    fn finished(&mut self, _progress: &Progress<'_>) {}
}

impl Observer for () {
    fn edge_visited(&mut self, _progress: &Progress<'_>) {}
}

/// A read-only view of the detector state.
pub struct Progress<'a> {
    graph: &'a Graph,
    context: &'a DfsContext,
}

impl<'a> Progress<'a> {
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn is_visited(&self, v: VId) -> bool {
        self.context.is_visited(v)
    }

    /// Returns whether `v` is known to be an articulation point so far.
    pub fn is_articulation(&self, v: VId) -> bool {
        self.context.articulation.get(v).copied().unwrap_or(false)
    }

    /// Returns the number of edges relaxed so far.
    pub fn edges_visited(&self) -> usize {
        self.context.edges_visited
    }
}

const UNVISITED: u32 = 0;

/// State shared across the whole depth-first search.
struct DfsContext {
    clock: u32,
    discovery: Vec<u32>,
    low: Vec<u32>,
    parent: Vec<Option<VId>>,
    articulation: Vec<bool>,
    edges_visited: usize,
}

impl DfsContext {
    fn new(n: usize) -> Self {
        Self {
            clock: UNVISITED,
            discovery: vec![UNVISITED; n],
            low: vec![UNVISITED; n],
            parent: vec![None; n],
            articulation: vec![false; n],
            edges_visited: 0,
        }
    }

    fn is_visited(&self, v: VId) -> bool {
        self.discovery.get(v).map_or(false, |&d| d != UNVISITED)
    }

    fn discover(&mut self, v: VId, parent: Option<VId>) {
        self.clock += 1;
        self.discovery[v] = self.clock;
        self.low[v] = self.clock;
        self.parent[v] = parent;
    }
}

/// A suspended visit of `v`; `next` indexes its adjacency list.
struct Frame {
    v: VId,
    next: usize,
    children: usize,
}

/// Finds the articulation points among the alive vertices in one depth-first pass.
pub fn detect(graph: &Graph) -> ArticulationPoints {
    detect_observed(graph, &mut ())
}

/// Same as [`detect`], reporting progress to `observer`.
pub fn detect_observed<O: Observer>(graph: &Graph, observer: &mut O) -> ArticulationPoints {
    if !graph.is_undirected() {
        warn!("articulation points on a directed graph only follow out-edges");
    }
    let mut context = DfsContext::new(graph.id_bound());
    let mut stack: Vec<Frame> = Vec::new();
    for root in 0..graph.id_bound() {
        if !graph.is_alive(root) || context.is_visited(root) {
            continue;
        }
        context.discover(root, None);
        stack.push(Frame {
            v: root,
            next: 0,
            children: 0,
        });
        while let Some(frame) = stack.last_mut() {
            let v = frame.v;
            match graph.neighbors(v).get(frame.next).copied() {
                Some(w) => {
                    frame.next += 1;
                    if w == v || !graph.is_alive(w) || context.parent[v] == Some(w) {
                        continue;
                    }
                    if context.is_visited(w) {
                        context.low[v] = context.low[v].min(context.discovery[w]);
                    } else {
                        frame.children += 1;
                        context.discover(w, Some(v));
                        stack.push(Frame {
                            v: w,
                            next: 0,
                            children: 0,
                        });
                    }
                    context.edges_visited += 1;
                    observer.edge_visited(&Progress {
                        graph,
                        context: &context,
                    });
                }
                None => {
                    let children = frame.children;
                    stack.pop();
                    match context.parent[v] {
                        Some(p) => {
                            context.low[p] = context.low[p].min(context.low[v]);
                            if context.parent[p].is_some()
                                && context.low[v] >= context.discovery[p]
                            {
                                context.articulation[p] = true;
                            }
                        }
                        None => {
                            if children > 1 {
                                context.articulation[v] = true;
                            }
                        }
                    }
                }
            }
        }
    }
    observer.finished(&Progress {
        graph,
        context: &context,
    });
    let points = ArticulationPoints::from_flags(context.articulation);
    info!(
        "found {} articulation points among {} vertices",
        points.len(),
        graph.vertex_count()
    );
    points
}
