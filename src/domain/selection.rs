//! Multipath selection as an explicit state machine.
//!
//! The user enables the tool, clicks a source edge, then a destination edge;
//! the second click resolves the path between them. Every transition borrows
//! the current state and returns the next one.

use crate::domain::edge::{Edge, EdgeId};
use crate::domain::error::ResolveError;
use crate::domain::graph::NetworkGraph;
use crate::domain::marker::Marker;
use crate::domain::measure::LatLng;
use crate::domain::path::{ComputedPath, PathOutcome, extract_all_edges};
use crate::domain::ports::ShortestPathFinder;
use crate::domain::resolver::PathResolver;

/// One click on the network: the edge hit and where it was hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub edge: EdgeId,
    pub latlng: LatLng,
}

impl Step {
    pub fn new(edge: EdgeId, latlng: LatLng) -> Self {
        Self { edge, latlng }
    }
}

/// Cursor hint for the map container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    /// Waiting for the source edge
    WResize,
    /// Waiting for the destination edge
    EResize,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Default => "",
            Cursor::WResize => "w-resize",
            Cursor::EResize => "e-resize",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Idle,
    AwaitingFirstPoint,
    AwaitingSecondPoint {
        source: Step,
    },
    Computed {
        source: Step,
        dest: Step,
        outcome: PathOutcome,
    },
}

impl Selection {
    /// Fresh start: previous steps, markers and paths are dropped.
    pub fn enable(&self) -> Self {
        Selection::AwaitingFirstPoint
    }

    /// Stop listening for clicks. A computed result stays available.
    pub fn disable(&self) -> Self {
        match self {
            Selection::Computed { .. } => self.clone(),
            _ => Selection::Idle,
        }
    }

    /// Handle a click on an edge of the network.
    ///
    /// Clicks are ignored while idle or once computed, and the source edge is
    /// never accepted a second time.
    pub fn select(
        &self,
        step: Step,
        graph: &NetworkGraph,
        finder: &dyn ShortestPathFinder,
    ) -> Result<Self, ResolveError> {
        match self {
            Selection::AwaitingFirstPoint => {
                if !graph.contains_edge(step.edge) {
                    return Err(ResolveError::UnknownEdge(step.edge));
                }
                Ok(Selection::AwaitingSecondPoint { source: step })
            }
            Selection::AwaitingSecondPoint { source } if source.edge == step.edge => {
                Ok(self.clone())
            }
            Selection::AwaitingSecondPoint { source } => compute(*source, step, graph, finder),
            Selection::Idle | Selection::Computed { .. } => Ok(self.clone()),
        }
    }

    /// Rebuild a previous selection and compute it again.
    ///
    /// Unlike [`select`](Self::select), `start` and `end` may name the same
    /// edge, which yields an empty leg.
    pub fn restore(
        &self,
        start: Step,
        end: Step,
        graph: &NetworkGraph,
        finder: &dyn ShortestPathFinder,
    ) -> Result<Self, ResolveError> {
        compute(start, end, graph, finder)
    }

    pub fn is_enabled(&self) -> bool {
        matches!(
            self,
            Selection::AwaitingFirstPoint | Selection::AwaitingSecondPoint { .. }
        )
    }

    /// Selected edge ids, in click order
    pub fn steps(&self) -> Vec<EdgeId> {
        match self {
            Selection::Idle | Selection::AwaitingFirstPoint => Vec::new(),
            Selection::AwaitingSecondPoint { source } => vec![source.edge],
            Selection::Computed { source, dest, .. } => vec![source.edge, dest.edge],
        }
    }

    pub fn source_marker(&self) -> Option<Marker> {
        match self {
            Selection::AwaitingSecondPoint { source } | Selection::Computed { source, .. } => {
                Some(Marker::source(source.latlng))
            }
            _ => None,
        }
    }

    pub fn dest_marker(&self) -> Option<Marker> {
        match self {
            Selection::Computed { dest, .. } => Some(Marker::destination(dest.latlng)),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&PathOutcome> {
        match self {
            Selection::Computed { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn computed_paths(&self) -> &[ComputedPath] {
        self.outcome().map(PathOutcome::paths).unwrap_or(&[])
    }

    pub fn all_edges(&self) -> Vec<&Edge> {
        extract_all_edges(self.computed_paths())
    }

    pub fn cursor(&self) -> Cursor {
        match self {
            Selection::AwaitingFirstPoint => Cursor::WResize,
            Selection::AwaitingSecondPoint { .. } => Cursor::EResize,
            _ => Cursor::Default,
        }
    }
}

fn compute(
    source: Step,
    dest: Step,
    graph: &NetworkGraph,
    finder: &dyn ShortestPathFinder,
) -> Result<Selection, ResolveError> {
    let outcome = PathResolver::new(finder).resolve(graph, &[source.edge, dest.edge])?;
    Ok(Selection::Computed {
        source,
        dest,
        outcome,
    })
}
