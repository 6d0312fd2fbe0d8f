use crate::types::{VId, Weight};
use std::hash::{Hash, Hasher};

/// A logical record of an inserted edge.
///
/// Two edges are equal when their endpoints and directedness match. The weight is not part
/// of the identity.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    src: VId,
    dst: VId,
    undirected: bool,
    weight: Weight,
}

impl Edge {
    pub fn new(src: VId, dst: VId, undirected: bool) -> Self {
        Self {
            src,
            dst,
            undirected,
            weight: 0.0,
        }
    }

    pub fn src(&self) -> VId {
        self.src
    }

    pub fn dst(&self) -> VId {
        self.dst
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst && self.undirected == other.undirected
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dst.hash(state);
        self.undirected.hash(state);
    }
}
