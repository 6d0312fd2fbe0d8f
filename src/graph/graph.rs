use crate::{
    error::{Error, Result},
    graph::{display, Edge, Liveness, Vertex},
    types::{VId, Weight, MAX_VID},
};
use std::collections::HashSet;
use std::ops::Deref;

/// An adjacency-list graph over integer-identified vertices.
///
/// Vertex ids are used directly as indices, so storage is a dense vector. Ids that were never
/// added leave a hole which every query treats as an absent vertex.
///
/// The adjacency lists are the traversal structure. The edge set is a logical record of the
/// inserted edges; it deduplicates exact `(src, dst, undirected)` triples while the adjacency
/// lists keep every insertion, so parallel insertions are counted twice by
/// [`edge_count`](Graph::edge_count).
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Option<Vertex>>,
    adjacency: Vec<Vec<VId>>,
    edges: HashSet<Edge>,
    undirected: bool,
    source: Option<VId>,
    len: usize,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new(undirected: bool) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            edges: HashSet::new(),
            undirected,
            source: None,
            len: 0,
        }
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Adds the vertex `v` if it is not present yet.
    ///
    /// The first vertex ever added becomes the source of the graph. Ids above
    /// [`MAX_VID`] are rejected, and so is an id whose storage cannot be allocated.
    pub fn add_vertex(&mut self, v: VId) -> Result<()> {
        if self.has_vertex(v) {
            return Ok(());
        }
        if v > MAX_VID {
            return Err(Error::IdOutOfRange(v));
        }
        if v >= self.vertices.len() {
            let additional = v + 1 - self.vertices.len();
            self.vertices
                .try_reserve(additional)
                .and_then(|_| self.adjacency.try_reserve(additional))
                .map_err(|_| Error::OutOfMemory(v))?;
            self.vertices.resize_with(v + 1, || None);
            self.adjacency.resize_with(v + 1, Vec::new);
        }
        self.vertices[v] = Some(Vertex::new(v));
        self.len += 1;
        if self.source.is_none() {
            self.source = Some(v);
        }
        Ok(())
    }

    /// Adds the vertex `v` if needed and sets its label.
    pub fn add_labeled_vertex<S: Into<String>>(&mut self, v: VId, label: S) -> Result<()> {
        self.add_vertex(v)?;
        self.set_label(v, label)
    }

    /// Adds an edge with the default weight, inserting missing endpoints.
    pub fn add_edge(&mut self, u: VId, v: VId) -> Result<()> {
        self.add_weighted_edge(u, v, 0.0)
    }

    /// Adds an edge, inserting missing endpoints.
    ///
    /// Re-adding an edge appends to the adjacency lists again and replaces the weight kept in
    /// the edge set, so the last weight wins.
    pub fn add_weighted_edge(&mut self, u: VId, v: VId, weight: Weight) -> Result<()> {
        if u.max(v) > MAX_VID {
            return Err(Error::IdOutOfRange(u.max(v)));
        }
        self.add_vertex(u)?;
        self.add_vertex(v)?;
        self.adjacency[u].push(v);
        if self.undirected {
            self.adjacency[v].push(u);
        }
        let mut edge = Edge::new(u, v, self.undirected);
        edge.set_weight(weight);
        self.edges.replace(edge);
        Ok(())
    }

    pub fn has_vertex(&self, v: VId) -> bool {
        matches!(self.vertices.get(v), Some(Some(_)))
    }

    pub fn vertex(&self, v: VId) -> Result<&Vertex> {
        match self.vertices.get(v) {
            Some(Some(vertex)) => Ok(vertex),
            _ => Err(Error::MissingVertex(v)),
        }
    }

    pub fn set_label<S: Into<String>>(&mut self, v: VId, label: S) -> Result<()> {
        self.vertex_mut(v)?.set_label(label);
        Ok(())
    }

    /// Returns whether `v` has `w` in its adjacency list.
    pub fn has_edge(&self, v: VId, w: VId) -> Result<bool> {
        Ok(self.adj_list(v)?.contains(&w))
    }

    /// Returns the adjacency list of `v`, dead neighbors included.
    pub fn adj_list(&self, v: VId) -> Result<&[VId]> {
        if self.has_vertex(v) {
            Ok(&self.adjacency[v])
        } else {
            Err(Error::MissingVertex(v))
        }
    }

    /// Unchecked adjacency access for the algorithms, which only walk present vertices.
    pub(crate) fn neighbors(&self, v: VId) -> &[VId] {
        &self.adjacency[v]
    }

    /// Returns whether `v` is present and alive.
    pub fn is_alive(&self, v: VId) -> bool {
        match self.vertices.get(v) {
            Some(Some(vertex)) => vertex.is_alive(),
            _ => false,
        }
    }

    /// Returns an iterator visiting every present vertex in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().filter_map(Option::as_ref)
    }

    /// Returns an iterator visiting the logical edge set in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn source(&self) -> Option<VId> {
        self.source
    }

    pub fn set_source(&mut self, v: VId) -> Result<()> {
        if self.has_vertex(v) {
            self.source = Some(v);
            Ok(())
        } else {
            Err(Error::MissingVertex(v))
        }
    }

    /// Returns the number of present vertices, dead ones included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns one past the largest id ever added; per-vertex arrays are sized by it.
    pub fn id_bound(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of alive vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices().filter(|v| v.is_alive()).count()
    }

    /// Returns the number of adjacency entries joining two alive vertices, halved for
    /// undirected graphs.
    pub fn edge_count(&self) -> usize {
        let count: usize = self
            .vertices()
            .filter(|v| v.is_alive())
            .map(|v| {
                self.adjacency[v.id()]
                    .iter()
                    .filter(|&&w| self.is_alive(w))
                    .count()
            })
            .sum();
        if self.undirected {
            count / 2
        } else {
            count
        }
    }

    pub fn disable_vertex(&mut self, v: VId) -> Result<()> {
        self.vertex_mut(v)?.set_alive(false);
        Ok(())
    }

    pub fn enable_vertex(&mut self, v: VId) -> Result<()> {
        self.vertex_mut(v)?.set_alive(true);
        Ok(())
    }

    /// Sets the liveness of every vertex labelled `label` and returns how many were touched.
    ///
    /// Unlike [`disable_vertex`](Graph::disable_vertex) this matches by value, so vertices
    /// sharing a label are toggled together.
    pub fn set_alive_by_label(&mut self, label: &str, alive: bool) -> usize {
        let mut touched = 0;
        for vertex in self.vertices.iter_mut().filter_map(Option::as_mut) {
            if vertex.label() == label {
                vertex.set_alive(alive);
                touched += 1;
            }
        }
        touched
    }

    /// Disables `v` until the returned guard is dropped, which restores its previous liveness.
    pub fn with_disabled(&mut self, v: VId) -> Result<Disabled<'_>> {
        let was_alive = self.vertex(v)?.is_alive();
        self.disable_vertex(v)?;
        Ok(Disabled {
            graph: self,
            id: v,
            was_alive,
        })
    }
}

// Private methods.
impl Graph {
    fn vertex_mut(&mut self, v: VId) -> Result<&mut Vertex> {
        match self.vertices.get_mut(v) {
            Some(Some(vertex)) => Ok(vertex),
            _ => Err(Error::MissingVertex(v)),
        }
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display(self, f)
    }
}

/// A graph with one vertex temporarily disabled.
pub struct Disabled<'a> {
    graph: &'a mut Graph,
    id: VId,
    was_alive: bool,
}

impl<'a> Disabled<'a> {
    pub fn id(&self) -> VId {
        self.id
    }
}

impl<'a> Deref for Disabled<'a> {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &*self.graph
    }
}

impl<'a> Drop for Disabled<'a> {
    fn drop(&mut self) {
        if let Some(Some(vertex)) = self.graph.vertices.get_mut(self.id) {
            vertex.set_alive(self.was_alive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_triangle() -> Graph {
        let mut graph = Graph::new(true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new(true);
        graph.add_vertex(2).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_vertex(0).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.source(), Some(2));
        assert_eq!(graph.id_bound(), 3);
        assert!(!graph.has_vertex(1));
    }

    #[test]
    fn test_add_edge_inserts_endpoints() {
        let graph = create_triangle();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.adj_list(0).unwrap(), &[1, 2]);
        assert!(graph.has_edge(1, 0).unwrap());
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges().count(), 3);
    }

    #[test]
    fn test_directed_edges() {
        let mut graph = Graph::new(false);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        assert!(graph.has_edge(0, 1).unwrap());
        assert!(!graph.has_edge(1, 0).unwrap());
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edges().all(|e| !e.is_undirected()));
    }

    #[test]
    fn test_parallel_insertions() {
        let mut graph = Graph::new(true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.adj_list(0).unwrap(), &[1, 1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_missing_vertex() {
        let graph = create_triangle();
        assert!(matches!(graph.adj_list(9), Err(Error::MissingVertex(9))));
        assert!(matches!(graph.has_edge(9, 0), Err(Error::MissingVertex(9))));
        assert!(graph.vertex(9).is_err());
        let mut graph = graph;
        assert!(graph.disable_vertex(9).is_err());
        assert!(graph.set_source(9).is_err());
    }

    #[test]
    fn test_counts_honor_liveness() {
        let mut graph = create_triangle();
        graph.disable_vertex(1).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.adj_list(0).unwrap(), &[1, 2]);
        graph.enable_vertex(1).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_with_disabled_restores() {
        let mut graph = create_triangle();
        {
            let disabled = graph.with_disabled(2).unwrap();
            assert_eq!(disabled.id(), 2);
            assert!(!disabled.is_alive(2));
            assert_eq!(disabled.vertex_count(), 2);
        }
        assert!(graph.is_alive(2));
        graph.disable_vertex(0).unwrap();
        drop(graph.with_disabled(0).unwrap());
        assert!(!graph.is_alive(0));
    }

    #[test]
    fn test_set_alive_by_label() {
        let mut graph = create_triangle();
        graph.set_label(0, "hub").unwrap();
        graph.add_labeled_vertex(5, "hub").unwrap();
        assert_eq!(graph.set_alive_by_label("hub", false), 2);
        assert!(!graph.is_alive(0));
        assert!(!graph.is_alive(5));
        assert!(graph.is_alive(1));
        assert_eq!(graph.set_alive_by_label("nowhere", false), 0);
    }

    #[test]
    fn test_weighted_edge() {
        let mut graph = Graph::new(false);
        graph.add_weighted_edge(3, 4, 1.5).unwrap();
        let edge = graph.edges().next().unwrap();
        assert_eq!((edge.src(), edge.dst(), edge.weight()), (3, 4, 1.5));
        assert_eq!(graph.source(), Some(3));
    }

    #[test]
    fn test_last_weight_wins() {
        let mut graph = Graph::new(true);
        graph.add_weighted_edge(0, 1, 1.5).unwrap();
        graph.add_weighted_edge(0, 1, 4.0).unwrap();
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.edges().next().unwrap().weight(), 4.0);
        assert_eq!(graph.adj_list(1).unwrap(), &[0, 0]);
    }

    #[test]
    fn test_id_out_of_range() {
        let mut graph = Graph::new(true);
        assert!(matches!(
            graph.add_vertex(VId::MAX),
            Err(Error::IdOutOfRange(VId::MAX))
        ));
        assert!(matches!(
            graph.add_edge(0, MAX_VID + 1),
            Err(Error::IdOutOfRange(_))
        ));
        assert!(graph.is_empty());
        assert_eq!(graph.id_bound(), 0);
    }
}
