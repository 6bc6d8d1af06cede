use crate::domain::edge::Edge;
use crate::domain::node::NodeId;

/// One traversal step of a shortest path
#[derive(Debug, Clone, PartialEq)]
pub struct PathComponent {
    pub start: NodeId,
    pub end: NodeId,
    pub edge: Edge,
    pub weight: f64,
}

/// Result of the shortest-path primitive: ordered steps plus their total weight
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub weight: f64,
    pub path: Vec<PathComponent>,
}

impl ShortestPath {
    /// A path whose steps are already known; the weight is their sum.
    pub fn from_components(path: Vec<PathComponent>) -> Self {
        let weight = path.iter().map(|c| c.weight).sum();
        Self { weight, path }
    }
}

/// A resolved leg between two selected edges
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPath {
    pub from_edge: Edge,
    pub to_edge: Edge,
    pub path: Vec<PathComponent>,
    pub weight: f64,
}

impl ComputedPath {
    /// Whether the steps chain contiguously from a node of `from_edge` to a
    /// node of `to_edge`. An empty path requires the two edges to touch.
    pub fn is_connected(&self) -> bool {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            return self.from_edge.shares_node_with(&self.to_edge);
        };
        self.from_edge.touches(first.start)
            && self.to_edge.touches(last.end)
            && self.path.windows(2).all(|w| w[0].end == w[1].start)
            && self.path.iter().all(|c| c.edge.opposite(c.start) == Some(c.end))
    }

    /// Nodes visited by the steps, in order, starting node included.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.path.iter().map(|c| c.start).collect();
        if let Some(last) = self.path.last() {
            nodes.push(last.end);
        }
        nodes
    }
}

/// Outcome of a resolution: either one or more legs, or no connection.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(Vec<ComputedPath>),
    NoPath,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn paths(&self) -> &[ComputedPath] {
        match self {
            PathOutcome::Found(paths) => paths,
            PathOutcome::NoPath => &[],
        }
    }

    pub fn total_weight(&self) -> Option<f64> {
        match self {
            PathOutcome::Found(paths) => Some(paths.iter().map(|p| p.weight).sum()),
            PathOutcome::NoPath => None,
        }
    }
}

/// Edges traversed between the selected endpoints, endpoint edges excluded.
pub fn inner_edges(paths: &[ComputedPath]) -> impl Iterator<Item = &Edge> {
    paths.iter().flat_map(|p| p.path.iter().map(|c| &c.edge))
}

/// Complete edge list from the first selected edge to the last one.
///
/// The first path's `from_edge` comes first, then every step's edge, then the
/// last path's `to_edge`. Consecutive repeats of the same edge are collapsed,
/// so selecting an edge twice (or two legs meeting on an edge) yields it once.
pub fn extract_all_edges(paths: &[ComputedPath]) -> Vec<&Edge> {
    let (Some(first), Some(last)) = (paths.first(), paths.last()) else {
        return Vec::new();
    };

    let mut all_edges: Vec<&Edge> = Vec::new();
    let candidates = std::iter::once(&first.from_edge)
        .chain(inner_edges(paths))
        .chain(std::iter::once(&last.to_edge));
    for edge in candidates {
        if all_edges.last().is_some_and(|prev| prev.id == edge.id) {
            continue;
        }
        all_edges.push(edge);
    }
    all_edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(start: NodeId, end: NodeId, edge: &Edge) -> PathComponent {
        PathComponent {
            start,
            end,
            edge: edge.clone(),
            weight: edge.length,
        }
    }

    fn ids(edges: &[&Edge]) -> Vec<u64> {
        edges.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_extract_all_edges_empty_input() {
        assert!(extract_all_edges(&[]).is_empty());
    }

    #[test]
    fn test_extract_all_edges_same_edge_emitted_once() {
        let ab = Edge::new(1, 1, 2, 1.0);
        let cp = ComputedPath {
            from_edge: ab.clone(),
            to_edge: ab.clone(),
            path: vec![],
            weight: 0.0,
        };
        assert_eq!(ids(&extract_all_edges(&[cp])), vec![1]);
    }

    #[test]
    fn test_extract_all_edges_adjacent_edges_no_steps() {
        let ab = Edge::new(1, 1, 2, 1.0);
        let bc = Edge::new(2, 2, 3, 1.0);
        let cp = ComputedPath {
            from_edge: ab,
            to_edge: bc,
            path: vec![],
            weight: 0.0,
        };
        assert_eq!(ids(&extract_all_edges(&[cp])), vec![1, 2]);
    }

    #[test]
    fn test_extract_all_edges_orders_endpoints_around_steps() {
        let ab = Edge::new(1, 1, 2, 1.0);
        let bc = Edge::new(2, 2, 3, 1.0);
        let cd = Edge::new(3, 3, 4, 1.0);
        let de = Edge::new(4, 4, 5, 1.0);
        let cp = ComputedPath {
            from_edge: ab,
            to_edge: de,
            path: vec![step(2, 3, &bc), step(3, 4, &cd)],
            weight: 2.0,
        };
        assert_eq!(ids(&extract_all_edges(&[cp])), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_extract_all_edges_across_several_legs() {
        let ab = Edge::new(1, 1, 2, 1.0);
        let bc = Edge::new(2, 2, 3, 1.0);
        let cd = Edge::new(3, 3, 4, 1.0);
        let de = Edge::new(4, 4, 5, 1.0);
        let first = ComputedPath {
            from_edge: ab,
            to_edge: cd.clone(),
            path: vec![step(2, 3, &bc)],
            weight: 1.0,
        };
        let second = ComputedPath {
            from_edge: cd,
            to_edge: de,
            path: vec![],
            weight: 0.0,
        };
        let paths = [first.clone(), second.clone()];
        let flat = extract_all_edges(&paths);
        assert_eq!(ids(&flat), vec![1, 2, 4]);
        assert_eq!(
            inner_edges(&[first, second]).map(|e| e.id).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn test_is_connected_checks_chain() {
        let ab = Edge::new(1, 1, 2, 1.0);
        let bc = Edge::new(2, 2, 3, 1.0);
        let cd = Edge::new(3, 3, 4, 1.0);
        let good = ComputedPath {
            from_edge: ab.clone(),
            to_edge: cd.clone(),
            path: vec![step(2, 3, &bc)],
            weight: 1.0,
        };
        assert!(good.is_connected());
        assert_eq!(good.nodes(), vec![2, 3]);

        let reversed = ComputedPath {
            path: vec![step(3, 2, &bc)],
            ..good.clone()
        };
        assert!(!reversed.is_connected());

        let disjoint = ComputedPath {
            from_edge: ab,
            to_edge: cd,
            path: vec![],
            weight: 0.0,
        };
        assert!(!disjoint.is_connected());
    }

    #[test]
    fn test_outcome_accessors() {
        let ab = Edge::new(1, 1, 2, 2.0);
        let found = PathOutcome::Found(vec![ComputedPath {
            from_edge: ab.clone(),
            to_edge: ab,
            path: vec![],
            weight: 0.0,
        }]);
        assert!(found.is_found());
        assert_eq!(found.paths().len(), 1);
        assert_eq!(found.total_weight(), Some(0.0));
        assert!(!PathOutcome::NoPath.is_found());
        assert!(PathOutcome::NoPath.paths().is_empty());
        assert_eq!(PathOutcome::NoPath.total_weight(), None);
    }
}
