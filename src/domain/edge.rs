use crate::domain::node::NodeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge (a path section of the network)
pub type EdgeId = u64;

/// Undirected arc between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    /// Weight used by the shortest-path search (length in metres)
    pub length: f64,
    /// Endpoints, in the order the network stores them
    pub nodes_id: [NodeId; 2],
}

impl Edge {
    pub fn new(id: EdgeId, start: NodeId, end: NodeId, length: f64) -> Self {
        Self {
            id,
            length,
            nodes_id: [start, end],
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.nodes_id.contains(&node)
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint at all.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        match self.nodes_id {
            [a, b] if a == node => Some(b),
            [a, b] if b == node => Some(a),
            _ => None,
        }
    }

    pub fn shares_node_with(&self, other: &Edge) -> bool {
        self.nodes_id.iter().any(|&n| other.touches(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_endpoint() {
        let e = Edge::new(7, 1, 2, 3.0);
        assert_eq!(e.opposite(1), Some(2));
        assert_eq!(e.opposite(2), Some(1));
        assert_eq!(e.opposite(3), None);
    }

    #[test]
    fn test_self_loop_opposite_is_itself() {
        let e = Edge::new(7, 4, 4, 1.0);
        assert_eq!(e.opposite(4), Some(4));
    }

    #[test]
    fn test_shares_node_with() {
        let ab = Edge::new(1, 1, 2, 1.0);
        let bc = Edge::new(2, 2, 3, 1.0);
        let cd = Edge::new(3, 3, 4, 1.0);
        assert!(ab.shares_node_with(&bc));
        assert!(!ab.shares_node_with(&cd));
    }
}
