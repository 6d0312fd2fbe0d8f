use crate::types::VId;

/// Read and write access to the logical presence flag of a vertex.
pub trait Liveness {
    fn is_alive(&self) -> bool;

    fn set_alive(&mut self, alive: bool);
}

/// A vertex of the graph.
///
/// Vertices are never removed. A dead vertex stays in the adjacency lists but is skipped by
/// every traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VId,
    label: String,
    alive: bool,
}

impl Vertex {
    pub fn new(id: VId) -> Self {
        Self::with_label(id, id.to_string())
    }

    pub fn with_label<S: Into<String>>(id: VId, label: S) -> Self {
        Self {
            id,
            label: label.into(),
            alive: true,
        }
    }

    pub fn id(&self) -> VId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = label.into();
    }
}

impl Liveness for Vertex {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}
