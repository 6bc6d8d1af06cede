use crate::domain::edge::{Edge, EdgeId};
use crate::domain::error::GraphError;
use crate::domain::node::{Node, NodeId};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Serialized network, as exchanged with the map backend.
///
/// `nodes` maps a node to its neighbours (neighbour node -> joining edge),
/// `edges` maps an edge id to its record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: BTreeMap<NodeId, BTreeMap<NodeId, EdgeId>>,
    #[serde(default)]
    pub edges: BTreeMap<EdgeId, Edge>,
}

/// Network Graph - the core data structure
///
/// Undirected; every petgraph edge weight is the full [`Edge`] record so
/// traversals can read lengths without a side lookup.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    pub graph: UnGraph<Node, Edge>,
    node_to_index: HashMap<NodeId, NodeIndex>,
    edge_to_index: HashMap<EdgeId, EdgeIndex>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and validate a graph from its serialized form.
    pub fn from_data(data: GraphData) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for &id in data.nodes.keys() {
            graph.add_node(id);
        }

        for (&key, edge) in &data.edges {
            if key != edge.id {
                return Err(GraphError::EdgeIdMismatch { key, id: edge.id });
            }
            graph.add_edge(edge.clone())?;
        }

        for (&node, neighbours) in &data.nodes {
            for (&neighbour, &edge_id) in neighbours {
                let edge = graph
                    .edge(edge_id)
                    .ok_or(GraphError::UnknownAdjacencyEdge {
                        node,
                        neighbour,
                        edge: edge_id,
                    })?;
                if edge.opposite(node) != Some(neighbour) {
                    return Err(GraphError::AdjacencyMismatch {
                        node,
                        neighbour,
                        edge: edge_id,
                    });
                }
            }
        }

        Ok(graph)
    }

    /// Serialize back to the wire form, adjacency included.
    pub fn to_data(&self) -> GraphData {
        let mut data = GraphData::default();
        for node in self.graph.node_weights() {
            data.nodes.entry(node.id).or_default();
        }
        for edge in self.graph.edge_weights() {
            let [a, b] = edge.nodes_id;
            data.nodes.entry(a).or_default().insert(b, edge.id);
            data.nodes.entry(b).or_default().insert(a, edge.id);
            data.edges.insert(edge.id, edge.clone());
        }
        data
    }

    /// Add a node, or return the existing index if the id is already known.
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_to_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(Node::new(id));
        self.node_to_index.insert(id, idx);
        idx
    }

    /// Add an edge between two already-known nodes.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex, GraphError> {
        if self.edge_to_index.contains_key(&edge.id) {
            return Err(GraphError::DuplicateEdge(edge.id));
        }
        if !edge.length.is_finite() || edge.length < 0.0 {
            return Err(GraphError::InvalidLength(edge.id, edge.length));
        }

        let [a, b] = edge.nodes_id;
        let a_idx = self.node_index(a).ok_or(GraphError::UnknownNode {
            edge: edge.id,
            node: a,
        })?;
        let b_idx = self.node_index(b).ok_or(GraphError::UnknownNode {
            edge: edge.id,
            node: b,
        })?;

        let id = edge.id;
        let idx = self.graph.add_edge(a_idx, b_idx, edge);
        self.edge_to_index.insert(id, idx);
        Ok(idx)
    }

    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_to_index.get(&id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_to_index.get(&id).map(|&idx| &self.graph[idx])
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_to_index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges incident to `id`, paired with the node at their other end.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> {
        self.node_index(id)
            .into_iter()
            .flat_map(move |idx| self.graph.edges(idx))
            .map(move |e| {
                let other = if e.source() == e.target() {
                    e.source()
                } else if self.graph[e.source()].id == id {
                    e.target()
                } else {
                    e.source()
                };
                (self.graph[other].id, e.weight())
            })
    }

    /// Edges sharing at least one endpoint with `id`, excluding `id` itself,
    /// sorted by id.
    pub fn adjacent_edges(&self, id: EdgeId) -> Vec<EdgeId> {
        let Some(edge) = self.edge(id) else {
            return Vec::new();
        };
        let mut out: Vec<EdgeId> = edge
            .nodes_id
            .iter()
            .flat_map(|&n| self.neighbors(n))
            .map(|(_, e)| e.id)
            .filter(|&e| e != id)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
