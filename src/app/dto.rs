use crate::domain::edge::{Edge, EdgeId};
use crate::domain::marker::{Marker, MarkerRole};
use crate::domain::measure::LatLng;
use crate::domain::node::NodeId;
use crate::domain::path::{ComputedPath, PathComponent};
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub graph_path: String,
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResolveRequest {
    /// Selected edges: exactly `[from_edge, to_edge]`
    pub steps: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStatus {
    Found,
    NoPath,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResolveResponse {
    pub status: ResolveStatus,
    pub paths: Vec<ComputedPathDto>,
    /// Every edge from the first selected edge to the last one, in order
    pub all_edges: Vec<EdgeId>,
    pub total_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EdgeDto {
    pub id: EdgeId,
    pub length: f64,
    pub nodes_id: [NodeId; 2],
}

impl From<&Edge> for EdgeDto {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id,
            length: edge.length,
            nodes_id: edge.nodes_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PathComponentDto {
    pub start: NodeId,
    pub end: NodeId,
    pub edge: EdgeDto,
    pub weight: f64,
}

impl From<&PathComponent> for PathComponentDto {
    fn from(c: &PathComponent) -> Self {
        Self {
            start: c.start,
            end: c.end,
            edge: EdgeDto::from(&c.edge),
            weight: c.weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComputedPathDto {
    pub from_edge: EdgeDto,
    pub to_edge: EdgeDto,
    pub path: Vec<PathComponentDto>,
    /// Nodes walked between the two edges, in order
    pub nodes: Vec<NodeId>,
    pub weight: f64,
}

impl From<&ComputedPath> for ComputedPathDto {
    fn from(p: &ComputedPath) -> Self {
        Self {
            from_edge: EdgeDto::from(&p.from_edge),
            to_edge: EdgeDto::from(&p.to_edge),
            path: p.path.iter().map(PathComponentDto::from).collect(),
            nodes: p.nodes(),
            weight: p.weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EdgeInfoResponse {
    pub edge: EdgeDto,
    /// Edges sharing an endpoint with this one
    pub adjacent_edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct LatLngDto {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLngDto> for LatLng {
    fn from(p: LatLngDto) -> Self {
        LatLng::new(p.lat, p.lng)
    }
}

impl From<LatLng> for LatLngDto {
    fn from(p: LatLng) -> Self {
        Self {
            lat: p.lat,
            lng: p.lng,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MeasureRequest {
    pub points: Vec<LatLngDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MeasureResponse {
    /// Total polyline length in metres
    pub distance_m: f64,
    pub segments_m: Vec<f64>,
    pub point_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRoleDto {
    Source,
    Destination,
    Point,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarkerDto {
    pub latlng: LatLngDto,
    pub role: MarkerRoleDto,
}

impl From<Marker> for MarkerDto {
    fn from(m: Marker) -> Self {
        let role = match m.role {
            MarkerRole::Source => MarkerRoleDto::Source,
            MarkerRole::Destination => MarkerRoleDto::Destination,
            MarkerRole::Point => MarkerRoleDto::Point,
        };
        Self {
            latlng: m.latlng.into(),
            role,
        }
    }
}
