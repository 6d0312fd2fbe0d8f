use cutvertex::{
    articulation::{brute_force, brute_force_parallel, detect},
    components::count_connected_components,
    graph::Graph,
    loader::{load, Format, LoadOptions},
    traversal::{Order, Traversal},
    types::VId,
};
use std::collections::BTreeSet;
use std::io::Write;

fn create_graph(edges: &[(VId, VId)]) -> Graph {
    let mut graph = Graph::new(true);
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

fn create_two_components() -> Graph {
    create_graph(&[
        (0, 1),
        (0, 4),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (3, 4),
        (5, 6),
    ])
}

fn create_bus_network() -> Graph {
    create_graph(&[
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 4),
        (3, 5),
        (4, 5),
        (5, 6),
        (5, 7),
        (5, 9),
        (7, 8),
        (8, 9),
        (5, 10),
        (10, 11),
        (11, 13),
        (10, 12),
        (12, 14),
    ])
}

/// A deterministic family of sparse random graphs.
fn generated_graphs() -> Vec<Graph> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move |bound: usize| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % bound as u64) as usize
    };
    let mut graphs = Vec::new();
    for n in 1..40 {
        let mut graph = Graph::new(true);
        for v in 0..n {
            graph.add_vertex(v).unwrap();
        }
        let m = next(2 * n) + n / 2;
        for _ in 0..m {
            let (u, v) = (next(n), next(n));
            if u != v {
                graph.add_edge(u, v).unwrap();
            }
        }
        graphs.push(graph);
    }
    graphs
}

#[test]
fn test_two_components() {
    let mut graph = create_two_components();
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 8);
    assert_eq!(count_connected_components(&graph), 2);
    let detected = detect(&graph);
    assert!(detected.is_empty());
    assert!(!detected.contains(1));
    assert_eq!(brute_force(&mut graph).unwrap(), detected);
    for v in 0..5 {
        let disabled = graph.with_disabled(v).unwrap();
        assert_eq!(count_connected_components(&disabled), 2);
    }
}

#[test]
fn test_bus_network() {
    let mut graph = create_bus_network();
    assert_eq!(count_connected_components(&graph), 1);
    let detected = detect(&graph);
    assert_eq!(
        detected.to_set(),
        vec![5, 10, 11, 12].into_iter().collect::<BTreeSet<_>>()
    );
    assert_eq!(brute_force(&mut graph).unwrap(), detected);
    graph.disable_vertex(5).unwrap();
    assert!(count_connected_components(&graph) > 1);
    graph.enable_vertex(5).unwrap();
    assert_eq!(count_connected_components(&graph), 1);
}

#[test]
fn test_leaf_never_changes_components() {
    let mut graph = create_two_components();
    let baseline = count_connected_components(&graph);
    graph.disable_vertex(6).unwrap();
    assert_eq!(count_connected_components(&graph), baseline);
    graph.enable_vertex(6).unwrap();
    assert!(!detect(&graph).contains(6));
}

#[test]
fn test_detector_matches_brute_force() {
    for mut graph in generated_graphs() {
        let detected = detect(&graph);
        assert_eq!(brute_force_parallel(&graph).unwrap(), detected, "\n{}", graph);
        assert_eq!(brute_force(&mut graph).unwrap(), detected, "\n{}", graph);
    }
}

#[test]
fn test_detector_matches_brute_force_with_dead_vertices() {
    for mut graph in generated_graphs() {
        for v in (0..graph.id_bound()).step_by(5) {
            graph.disable_vertex(v).unwrap();
        }
        let detected = detect(&graph);
        assert_eq!(brute_force(&mut graph).unwrap(), detected, "\n{}", graph);
    }
}

#[test]
fn test_component_monotonicity() {
    for mut graph in generated_graphs() {
        let baseline = count_connected_components(&graph);
        let detected = detect(&graph);
        for v in 0..graph.id_bound() {
            let is_isolated = graph.adj_list(v).unwrap().is_empty();
            let count = count_connected_components(&graph.with_disabled(v).unwrap());
            if detected.contains(v) {
                assert!(count > baseline);
            } else if !is_isolated {
                assert_eq!(count, baseline);
            }
        }
    }
}

#[test]
fn test_enable_disable_idempotence() {
    for mut graph in generated_graphs() {
        let baseline = count_connected_components(&graph);
        for v in 0..graph.id_bound() {
            graph.disable_vertex(v).unwrap();
            graph.enable_vertex(v).unwrap();
            assert!(graph.is_alive(v));
            assert_eq!(count_connected_components(&graph), baseline);
        }
    }
}

#[test]
fn test_traversal_coverage() {
    let mut graph = create_bus_network();
    graph.disable_vertex(10).unwrap();
    let source = graph.source().unwrap();
    for &order in &[Order::Depth, Order::Breadth] {
        let visited: Vec<_> = Traversal::reachable(&graph, order, source)
            .map(|v| v.id())
            .collect();
        let unique: BTreeSet<_> = visited.iter().copied().collect();
        assert_eq!(visited.len(), unique.len());
        assert_eq!(unique, (0..10).collect::<BTreeSet<_>>());
    }
}

#[test]
fn test_edge_count_matches_edge_set() {
    let graph = create_bus_network();
    assert_eq!(graph.edge_count(), graph.edges().count());
    for graph in generated_graphs() {
        let mut distinct = BTreeSet::new();
        let duplicated = graph.edges().any(|e| {
            let key = (e.src().min(e.dst()), e.src().max(e.dst()));
            !distinct.insert(key)
        });
        let parallel = graph.vertices().any(|v| {
            let neighbors = graph.adj_list(v.id()).unwrap();
            neighbors.iter().collect::<BTreeSet<_>>().len() != neighbors.len()
        });
        if !duplicated && !parallel {
            assert_eq!(graph.edge_count(), graph.edges().count());
        }
    }
}

#[test]
fn test_load_and_detect() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "% 1-indexed path with a pendant triangle").unwrap();
    for (u, v) in &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 3), (4, 4)] {
        writeln!(file, "{} {}", u, v).unwrap();
    }
    let mut graph = load(file.path(), Format::Text, &LoadOptions::default()).unwrap();
    assert_eq!(graph.vertex_count(), 5);
    let detected = detect(&graph);
    assert_eq!(detected.iter().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(brute_force(&mut graph).unwrap(), detected);
}
