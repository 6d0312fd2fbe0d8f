//! Articulation point detection over graphs with soft-deletable vertices.

pub mod articulation;
pub mod components;
pub mod error;
pub mod graph;
pub mod loader;
pub mod snapshot;
pub mod traversal;
pub mod types;
