use crate::domain::edge::EdgeId;
use crate::domain::error::ResolveError;
use crate::domain::graph::NetworkGraph;
use crate::domain::path::{ComputedPath, PathOutcome};
use crate::domain::ports::ShortestPathFinder;

/// Resolves the path between two selected edges.
pub struct PathResolver<'a> {
    finder: &'a dyn ShortestPathFinder,
}

impl<'a> PathResolver<'a> {
    pub fn new(finder: &'a dyn ShortestPathFinder) -> Self {
        Self { finder }
    }

    /// Resolve `[from_edge, to_edge]` against `graph`.
    ///
    /// The search runs between the endpoint nodes of both edges. The result is
    /// a single leg wrapped in a list; longer step lists are rejected.
    pub fn resolve(
        &self,
        graph: &NetworkGraph,
        steps: &[EdgeId],
    ) -> Result<PathOutcome, ResolveError> {
        let &[from_edge_id, to_edge_id] = steps else {
            return Err(ResolveError::InvalidStepCount { got: steps.len() });
        };

        let from_edge = graph
            .edge(from_edge_id)
            .ok_or(ResolveError::UnknownEdge(from_edge_id))?;
        let to_edge = graph
            .edge(to_edge_id)
            .ok_or(ResolveError::UnknownEdge(to_edge_id))?;

        let Some(found) = self
            .finder
            .shortest_path(graph, &from_edge.nodes_id, &to_edge.nodes_id)
        else {
            return Ok(PathOutcome::NoPath);
        };

        Ok(PathOutcome::Found(vec![ComputedPath {
            from_edge: from_edge.clone(),
            to_edge: to_edge.clone(),
            path: found.path,
            weight: found.weight,
        }]))
    }
}
