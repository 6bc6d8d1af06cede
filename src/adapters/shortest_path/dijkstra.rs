use crate::domain::graph::NetworkGraph;
use crate::domain::node::NodeId;
use crate::domain::path::{PathComponent, ShortestPath};
use crate::domain::ports::ShortestPathFinder;
use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// Dijkstra over the undirected network, edge cost = edge length.
///
/// Runs one search per source node (A* with a zero heuristic) and keeps the
/// cheapest; on equal weight the earlier source in `from_nodes` wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraFinder;

impl DijkstraFinder {
    pub fn new() -> Self {
        Self
    }
}

impl ShortestPathFinder for DijkstraFinder {
    fn shortest_path(
        &self,
        graph: &NetworkGraph,
        from_nodes: &[NodeId],
        to_nodes: &[NodeId],
    ) -> Option<ShortestPath> {
        let targets: HashSet<NodeIndex> = to_nodes
            .iter()
            .filter_map(|&id| graph.node_index(id))
            .collect();
        if targets.is_empty() {
            return None;
        }

        let mut best: Option<(f64, Vec<NodeIndex>)> = None;
        for &from in from_nodes {
            let Some(start) = graph.node_index(from) else {
                continue;
            };
            let found = astar(
                &graph.graph,
                start,
                |n| targets.contains(&n),
                |e| e.weight().length,
                |_| 0.0,
            );
            if let Some((cost, nodes)) = found
                && best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost)
            {
                best = Some((cost, nodes));
            }
        }

        let (_, nodes) = best?;
        let path = nodes
            .windows(2)
            .map(|pair| cheapest_step(graph, pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()?;
        Some(ShortestPath::from_components(path))
    }
}

/// The cheapest edge joining two consecutive nodes (lowest id on ties).
fn cheapest_step(graph: &NetworkGraph, a: NodeIndex, b: NodeIndex) -> Option<PathComponent> {
    let edge = graph
        .graph
        .edges_connecting(a, b)
        .map(|e| e.weight())
        .min_by(|x, y| x.length.total_cmp(&y.length).then(x.id.cmp(&y.id)))?;
    Some(PathComponent {
        start: graph.node(a).id,
        end: graph.node(b).id,
        edge: edge.clone(),
        weight: edge.length,
    })
}
