use crate::adapters::fs::graph_file::JsonGraphSource;
use crate::adapters::shortest_path::dijkstra::DijkstraFinder;
use crate::app::dto::*;
use crate::domain::edge::EdgeId;
use crate::domain::error::ResolveError;
use crate::domain::graph::NetworkGraph;
use crate::domain::marker::Marker;
use crate::domain::measure::{LatLng, polyline_length, segment_lengths};
use crate::domain::path::{PathOutcome, extract_all_edges};
use crate::domain::ports::{GraphSource, ShortestPathFinder};
use crate::domain::resolver::PathResolver;
use anyhow::{Context as _, Result, anyhow};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard};
use tracing::{debug, info};

/// Shared handle over a loaded network; cheap to clone.
#[derive(Clone)]
pub struct RouteEngine {
    inner: Arc<RwLock<EngineData>>,
}

struct EngineData {
    graph_path: PathBuf,
    graph: Arc<NetworkGraph>,
    finder: Arc<dyn ShortestPathFinder>,
}

impl RouteEngine {
    /// Construct an engine from an already-built graph.
    ///
    /// Used for testing or when the graph comes from somewhere other than a file.
    pub fn from_prebuilt(graph_path: PathBuf, graph: NetworkGraph) -> Self {
        Self::with_finder(graph_path, graph, Arc::new(DijkstraFinder::new()))
    }

    pub fn with_finder(
        graph_path: PathBuf,
        graph: NetworkGraph,
        finder: Arc<dyn ShortestPathFinder>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(EngineData {
                graph_path,
                graph: Arc::new(graph),
                finder,
            })),
        }
    }

    pub fn load_from_json(json_path: &Path) -> Result<Self> {
        let graph = load_graph(json_path)?;
        Ok(Self::from_prebuilt(json_path.to_path_buf(), graph))
    }

    /// Re-read the graph file and swap it in. The previous graph stays in
    /// place if loading fails.
    pub fn reload(&self) -> Result<HealthResponse> {
        let path = self.read()?.graph_path.clone();
        let graph = load_graph(&path)?;

        let mut data = self
            .inner
            .write()
            .map_err(|_| anyhow!("engine lock poisoned"))?;
        data.graph = Arc::new(graph);
        Ok(health_of(&data))
    }

    pub fn health(&self) -> Result<HealthResponse> {
        Ok(health_of(&*self.read()?))
    }

    pub fn resolve(&self, req: ResolveRequest) -> Result<ResolveResponse> {
        let (graph, finder) = {
            let data = self.read()?;
            (data.graph.clone(), data.finder.clone())
        };

        let outcome = PathResolver::new(finder.as_ref()).resolve(&graph, &req.steps)?;
        debug!(steps = ?req.steps, found = outcome.is_found(), "resolved path");

        let status = match outcome {
            PathOutcome::Found(_) => ResolveStatus::Found,
            PathOutcome::NoPath => ResolveStatus::NoPath,
        };
        Ok(ResolveResponse {
            status,
            paths: outcome.paths().iter().map(ComputedPathDto::from).collect(),
            all_edges: extract_all_edges(outcome.paths())
                .iter()
                .map(|e| e.id)
                .collect(),
            total_weight: outcome.total_weight(),
        })
    }

    pub fn edge(&self, id: EdgeId) -> Result<EdgeInfoResponse> {
        let data = self.read()?;
        let edge = data.graph.edge(id).ok_or(ResolveError::UnknownEdge(id))?;
        Ok(EdgeInfoResponse {
            edge: EdgeDto::from(edge),
            adjacent_edges: data.graph.adjacent_edges(id),
        })
    }

    pub fn measure(&self, req: MeasureRequest) -> MeasureResponse {
        let points: Vec<LatLng> = req.points.into_iter().map(LatLng::from).collect();
        MeasureResponse {
            distance_m: polyline_length(&points),
            segments_m: segment_lengths(&points),
            point_count: points.len(),
        }
    }

    pub fn mark_point(&self, at: LatLngDto) -> MarkerDto {
        Marker::point(at.into()).into()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EngineData>> {
        self.inner.read().map_err(|_| anyhow!("engine lock poisoned"))
    }
}

fn load_graph(json_path: &Path) -> Result<NetworkGraph> {
    let data = JsonGraphSource::new(json_path).load()?;
    let graph = NetworkGraph::from_data(data)
        .with_context(|| format!("Invalid network graph: {}", json_path.display()))?;
    info!(
        path = %json_path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded network graph"
    );
    Ok(graph)
}

fn health_of(data: &EngineData) -> HealthResponse {
    HealthResponse {
        graph_path: data.graph_path.to_string_lossy().to_string(),
        node_count: data.graph.node_count(),
        edge_count: data.graph.edge_count(),
    }
}
