//! The graph and its vertices and edges.

pub use edge::Edge;
pub use graph::{Disabled, Graph};
pub use vertex::{Liveness, Vertex};

pub(crate) use display::display;

mod display;
mod edge;
mod graph;
mod vertex;
