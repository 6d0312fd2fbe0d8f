//! Various types shared by the graph and the algorithms.

/// The vertex id type. Ids double as dense indices into per-vertex arrays.
pub type VId = usize;

/// The edge weight type.
pub type Weight = f64;

/// The largest vertex id a graph accepts. Discovery times are `u32`, so every vertex must
/// fit in one.
pub const MAX_VID: VId = u32::MAX as VId - 1;
