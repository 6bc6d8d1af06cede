//! Test network generators for integration tests.
#![allow(dead_code)]

use multipath::domain::edge::Edge;
use multipath::domain::graph::NetworkGraph;
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a graph from `(edge_id, node_a, node_b, length)` tuples.
pub fn graph_of(edges: &[(u64, u64, u64, f64)]) -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    for &(_, a, b, _) in edges {
        graph.add_node(a);
        graph.add_node(b);
    }
    for &(id, a, b, len) in edges {
        graph
            .add_edge(Edge::new(id, a, b, len))
            .expect("valid fixture edge");
    }
    graph
}

/// A single edge 1 between nodes A=1 and B=2.
pub fn single_edge() -> NetworkGraph {
    graph_of(&[(1, 1, 2, 7.0)])
}

/// Chain A–B–C–D (nodes 1..4) with unit weights: edges 12, 23, 34.
pub fn unit_chain() -> NetworkGraph {
    graph_of(&[(12, 1, 2, 1.0), (23, 2, 3, 1.0), (34, 3, 4, 1.0)])
}

/// Two components: 1–2–3 and 10–11.
pub fn two_islands() -> NetworkGraph {
    graph_of(&[(1, 1, 2, 1.0), (2, 2, 3, 1.0), (9, 10, 11, 1.0)])
}

/// Diamond with a long and a short branch between nodes 1 and 4, plus
/// spur edges 100 (0–1) and 200 (4–5) to select from.
///
/// ```text
///        2
///   1.0 / \ 1.0
/// 0 - 1     4 - 5
///   4.0 \ / 4.0
///        3
/// ```
pub fn diamond() -> NetworkGraph {
    graph_of(&[
        (100, 0, 1, 2.0),
        (12, 1, 2, 1.0),
        (24, 2, 4, 1.0),
        (13, 1, 3, 4.0),
        (34, 3, 4, 4.0),
        (200, 4, 5, 2.0),
    ])
}

/// Write the wire form of `graph` to a temporary file.
pub fn graph_file(graph: &NetworkGraph) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    let json = serde_json::to_string(&graph.to_data()).expect("serialize graph");
    file.write_all(json.as_bytes()).expect("write graph");
    file
}
