use crate::domain::graph::{GraphData, NetworkGraph};
use crate::domain::node::NodeId;
use crate::domain::path::ShortestPath;
use anyhow::Result;

/// Shortest-path primitive port (implemented by Infrastructure)
///
/// Finds the cheapest path from any node of `from_nodes` to any node of
/// `to_nodes`, or `None` when they are not connected.
pub trait ShortestPathFinder: Send + Sync {
    fn shortest_path(
        &self,
        graph: &NetworkGraph,
        from_nodes: &[NodeId],
        to_nodes: &[NodeId],
    ) -> Option<ShortestPath>;
}

/// Graph data source port
pub trait GraphSource {
    fn load(&self) -> Result<GraphData>;
}
