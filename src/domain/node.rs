use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the trail network
pub type NodeId = u64;

/// Graph vertex. A node only carries its identifier; adjacency lives in the
/// graph through the edges that reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }
}
