use crate::{
    articulation::ArticulationPoints,
    components::count_connected_components,
    error::Result,
    graph::{Graph, Liveness},
    types::VId,
};
use log::info;
use rayon::prelude::*;

/// Finds the articulation points by disabling each alive vertex in turn and recounting the
/// connected components.
///
/// A vertex is reported when disabling it strictly increases the count. Disabling an isolated
/// vertex lowers the count and is not reported. Each vertex is re-enabled before the next one
/// is tried, so the graph ends in the liveness state it started in.
pub fn brute_force(graph: &mut Graph) -> Result<ArticulationPoints> {
    let baseline = count_connected_components(graph);
    let candidates = alive_vertices(graph);
    info!(
        "brute force over {} vertices, baseline {} components",
        candidates.len(),
        baseline
    );
    let mut flags = vec![false; graph.id_bound()];
    for v in candidates {
        let disabled = graph.with_disabled(v)?;
        flags[v] = count_connected_components(&disabled) > baseline;
    }
    Ok(ArticulationPoints::from_flags(flags))
}

/// Same as [`brute_force`], spreading the vertices over the rayon pool.
///
/// Every worker disables vertices on its own clone, so `graph` is never touched.
pub fn brute_force_parallel(graph: &Graph) -> Result<ArticulationPoints> {
    let baseline = count_connected_components(graph);
    let candidates = alive_vertices(graph);
    info!(
        "parallel brute force over {} vertices, baseline {} components",
        candidates.len(),
        baseline
    );
    let results = candidates
        .into_par_iter()
        .map_init(
            || graph.clone(),
            |local, v| -> Result<(VId, bool)> {
                let disabled = local.with_disabled(v)?;
                Ok((v, count_connected_components(&disabled) > baseline))
            },
        )
        .collect::<Result<Vec<_>>>()?;
    let mut flags = vec![false; graph.id_bound()];
    for (v, flag) in results {
        flags[v] = flag;
    }
    Ok(ArticulationPoints::from_flags(flags))
}

fn alive_vertices(graph: &Graph) -> Vec<VId> {
    graph
        .vertices()
        .filter(|v| v.is_alive())
        .map(|v| v.id())
        .collect()
}
